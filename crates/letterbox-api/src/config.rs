//! Server configuration, deserialised from `config.toml` and `LETTERBOX_*`
//! environment variables.

use letterbox_store_rest::StoreConfig;
use serde::Deserialize;

/// Runtime server configuration.
///
/// Every field has a default, so an absent config file yields a server that
/// listens locally with an unconfigured store (warn-and-degrade, per the
/// store client's contract) rather than refusing to start.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:  String,
  #[serde(default = "default_port")]
  pub port:  u16,
  /// Hosted-store connection settings.
  #[serde(default)]
  pub store: StoreConfig,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}
