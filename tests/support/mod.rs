pub mod mock_backend;

pub use mock_backend::{MockBackend, MockResponses};

use docsearch::api::DocumentApi;
use docsearch::forms::{SearchForm, UploadForm};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// One upload cycle, split the same way the view splits it
pub async fn submit_upload(form: &mut UploadForm, api: &dyn DocumentApi) {
    if let Ok(request) = form.begin_submit() {
        let result = api.upload_document(&request).await;
        form.finish_submit(result);
    }
}

/// One search cycle, split the same way the view splits it
pub async fn run_search(form: &mut SearchForm, api: &dyn DocumentApi) {
    if let Ok(keyword) = form.begin_search() {
        let result = api.search_documents(&keyword).await;
        form.finish_search(result);
    }
}
