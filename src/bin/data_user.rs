use std::sync::Arc;
use tracing::{error, info};

use docsearch::api::ApiClient;
use docsearch::ui::{launch, AppContext, SearchApp};
use docsearch::Config;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting data-user against {}", client.base_url());
    let ctx = AppContext {
        config,
        api: Arc::new(client),
    };
    launch("Search Documents", ctx, SearchApp);
}
