use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Canned answers of the fake document service
#[derive(Clone, Debug)]
pub struct MockResponses {
    pub upload_status: StatusCode,
    pub search_status: StatusCode,
    pub search_body: String,
}

impl Default for MockResponses {
    fn default() -> Self {
        Self {
            upload_status: StatusCode::OK,
            search_status: StatusCode::OK,
            search_body: "[]".to_string(),
        }
    }
}

#[derive(Default, Debug)]
struct Recorded {
    uploads: Vec<Value>,
    searches: Vec<String>,
}

#[derive(Clone)]
struct MockState {
    responses: MockResponses,
    recorded: Arc<Mutex<Recorded>>,
}

/// In-process stand-in for the document service that records every call
pub struct MockBackend {
    pub base_url: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockBackend {
    pub async fn start(responses: MockResponses) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = MockState {
            responses,
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/DataOwner", post(upload))
            .route("/DataUser/:keyword", get(search))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            recorded,
        }
    }

    /// JSON bodies received on POST /DataOwner, in arrival order
    pub fn uploads(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().uploads.clone()
    }

    /// Decoded keywords received on GET /DataUser/{keyword}
    pub fn searches(&self) -> Vec<String> {
        self.recorded.lock().unwrap().searches.clone()
    }
}

async fn upload(State(state): State<MockState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.recorded.lock().unwrap().uploads.push(body);
    (state.responses.upload_status, r#"{"status":"stored"}"#)
}

async fn search(State(state): State<MockState>, Path(keyword): Path<String>) -> impl IntoResponse {
    state.recorded.lock().unwrap().searches.push(keyword);
    (
        state.responses.search_status,
        [(header::CONTENT_TYPE, "application/json")],
        state.responses.search_body.clone(),
    )
}
