//! Request/response state for the two views.
//!
//! Each form is a plain struct driven in two halves around the network call:
//! `begin_*` validates and flips `loading` on, `finish_*` records the outcome
//! and flips it off. The UI awaits the request between the two.

pub mod error;
pub mod search;
pub mod upload;

pub use error::FormError;
pub use search::{SearchForm, SearchView};
pub use upload::UploadForm;
