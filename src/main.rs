use std::sync::Arc;

use mymanga_admin::api::AdminApiClient;
use mymanga_admin::config::Config;
use mymanga_admin::ui::{make_config, App, AppContext};
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration, falling back to defaults: {}", e);
            Config::default()
        }
    };

    let client = match AdminApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build admin API client: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting MyManga VN Admin against {} ({} rows per page)",
        client.base_url(),
        config.page_size
    );

    let context = AppContext::new(config, Arc::new(client));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
