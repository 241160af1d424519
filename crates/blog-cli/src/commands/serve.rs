use anyhow::{Context, Result};
use blog_config::Config;
use blog_server::BlogServer;
use blog_storage::Storage;
use std::sync::Arc;
use tracing::info;

/// Command-line flags win over the config file
pub fn apply_overrides(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
) -> Config {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(url) = database {
        config.database.url = url;
    }
    config
}

pub async fn handle(config: &Config, init_schema: bool) -> Result<()> {
    let storage = Storage::connect(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    if init_schema {
        storage.init_schema().await?;
        info!("Ensured posts table exists");
    }

    let server = BlogServer::new(Arc::new(storage));
    server.serve(&config.bind_addr()).await
}
