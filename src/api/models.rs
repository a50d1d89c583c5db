use serde::{Deserialize, Serialize};

/// A search hit as returned by the document service. The client never
/// looks inside it; it is only rendered back to the user.
pub type DocumentRecord = serde_json::Value;

/// Payload of the upload call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadRequest {
    pub document: String,
    pub keyword: String,
}
