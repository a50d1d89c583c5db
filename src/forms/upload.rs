use crate::api::{ApiError, UploadRequest};
use crate::forms::FormError;
use serde_json::Value;
use tracing::{debug, error, info};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Document uploaded successfully!";

/// State behind the upload view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    document: String,
    keyword: String,
    loading: bool,
    message: Option<String>,
}

impl UploadForm {
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_document(&mut self, document: String) {
        self.document = document;
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword = keyword;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Outcome of the last finished upload, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the upload button is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.document.is_empty() && !self.keyword.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Uploading..."
        } else {
            "Upload"
        }
    }

    /// Validate and enter the loading state. On refusal nothing changes,
    /// including the message.
    pub fn begin_submit(&mut self) -> Result<UploadRequest, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        if self.document.is_empty() || self.keyword.is_empty() {
            return Err(FormError::MissingFields);
        }

        self.loading = true;
        self.message = None;
        debug!("Upload started for keyword {:?}", self.keyword);

        Ok(UploadRequest {
            document: self.document.clone(),
            keyword: self.keyword.clone(),
        })
    }

    /// Record the result of the request started by `begin_submit`
    pub fn finish_submit(&mut self, result: Result<Value, ApiError>) {
        match result {
            Ok(body) => {
                info!("Upload successful: {}", body);
                self.message = Some(UPLOAD_SUCCESS_MESSAGE.to_string());
            }
            Err(e) => {
                error!("Error uploading document: {}", e);
                self.message = Some(FormError::Upload(e).to_string());
            }
        }
        self.loading = false;
    }
}
