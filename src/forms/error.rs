use crate::api::ApiError;
use thiserror::Error;

/// Everything a form can report. The `Display` text of the user-facing
/// variants is exactly what the views show.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please enter a keyword.")]
    MissingKeyword,
    #[error("Document and keyword are required.")]
    MissingFields,
    #[error("A request is already in progress.")]
    InFlight,
    #[error("Error uploading document. Please try again.")]
    Upload(#[source] ApiError),
    #[error("Error fetching data. Please try again later.")]
    Search(#[source] ApiError),
}

impl FormError {
    /// True for errors caught before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FormError::MissingKeyword | FormError::MissingFields | FormError::InFlight
        )
    }
}
