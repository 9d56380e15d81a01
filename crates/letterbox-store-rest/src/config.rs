//! Connection settings for the hosted store.

use serde::Deserialize;

/// Endpoint and credentials for the hosted store's REST interface.
///
/// Both fields default to empty so a missing configuration deserialises
/// cleanly; [`RestStore`](crate::RestStore) treats an empty config as
/// "not configured" and fails per call rather than at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
  /// Base URL of the store, e.g. `https://abcdef.supabase.co`.
  #[serde(default)]
  pub endpoint:   String,
  /// Access key, sent both as the `apikey` header and as a bearer token.
  #[serde(default)]
  pub access_key: String,
}

impl StoreConfig {
  /// Both fields present and non-empty.
  pub fn is_configured(&self) -> bool {
    !self.endpoint.trim().is_empty() && !self.access_key.trim().is_empty()
  }
}
