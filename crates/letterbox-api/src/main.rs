//! letterbox-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds the
//! hosted-store client and the submission gateway, and serves the JSON API
//! over HTTP. A missing store configuration is logged and degrades at call
//! time; it never prevents startup.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use letterbox_api::config::ServerConfig;
use letterbox_core::SubmissionGateway;
use letterbox_store_rest::RestStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Letterbox contact-form server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("LETTERBOX").separator("__"),
    )
    .build()
    .context("failed to read configuration")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Build the store client and gateway. An unconfigured store logs a warning
  // here and fails per call.
  let store = RestStore::new(server_cfg.store.clone())
    .context("failed to build store client")?;
  let gateway = Arc::new(SubmissionGateway::new(Arc::new(store)));

  let app = letterbox_api::router(gateway);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
