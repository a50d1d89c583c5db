mod app;
mod button;
mod input_field;
mod search_page;
mod search_results;
mod upload_page;

pub use app::{SearchApp, UploadApp};
pub use button::Button;
pub use input_field::InputField;
pub use search_page::SearchPage;
pub use search_results::{DocumentResults, NoResultsFound};
pub use upload_page::UploadPage;
