use crate::api::models::{DocumentRecord, UploadRequest};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two calls the forms make against the document service
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// POST /DataOwner. Returns the response body, which callers only log.
    async fn upload_document(&self, request: &UploadRequest) -> Result<Value, ApiError>;

    /// GET /DataUser/{keyword}. `None` when the service answered with an
    /// empty body or `null`.
    async fn search_documents(
        &self,
        keyword: &str,
    ) -> Result<Option<Vec<DocumentRecord>>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = config.api_base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                base_url,
                parsed.scheme()
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn upload_url(&self) -> String {
        format!("{}/DataOwner", self.base_url)
    }

    // Keyword is a single path segment, so '/' and friends must be escaped
    fn search_url(&self, keyword: &str) -> String {
        format!("{}/DataUser/{}", self.base_url, urlencoding::encode(keyword))
    }
}

#[async_trait]
impl DocumentApi for ApiClient {
    async fn upload_document(&self, request: &UploadRequest) -> Result<Value, ApiError> {
        let url = self.upload_url();
        info!("📡 POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            warn!("✗ Upload rejected: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Body shape is up to the service; keep it loggable either way
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(body)),
        }
    }

    async fn search_documents(
        &self,
        keyword: &str,
    ) -> Result<Option<Vec<DocumentRecord>>, ApiError> {
        let url = self.search_url(keyword);
        info!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            warn!("✗ Search failed: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let records = decode_search_body(&body)?;
        info!(
            "✓ Search for {:?} returned {} record(s)",
            keyword,
            records.as_ref().map_or(0, Vec::len)
        );
        Ok(records)
    }
}

/// Empty body and `null` both mean "nothing"; anything but an array is an error
fn decode_search_body(body: &str) -> Result<Option<Vec<DocumentRecord>>, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<Vec<DocumentRecord>>>(body)?)
}
