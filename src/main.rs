//! Infosite HTTP server
//!
//! Reads configuration from the YAML file named by `INFOSITE_CONFIG` when set,
//! applies `INFOSITE_*` environment overrides and serves until SIGTERM/Ctrl+C.

use infosite::prelude::*;
use tracing_subscriber::EnvFilter;

const ENV_CONFIG: &str = "INFOSITE_CONFIG";
const DEFAULT_LOG_FILTER: &str = "infosite=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match std::env::var(ENV_CONFIG) {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            ServerConfig::from_yaml_file(&path)?
        }
        Err(_) => ServerConfig::default(),
    }
    .with_env_overrides()?;

    tracing::info!(
        templates = %config.templates.dir.display(),
        content = %config.content.dir.display(),
        "infosite starting"
    );

    let bind = config.server.bind.clone();
    ServerBuilder::new().with_config(config).serve(&bind).await
}
