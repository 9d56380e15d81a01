//! Error type for `letterbox-store-rest`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Endpoint or access key missing; the client was constructed in degraded
  /// mode and every call lands here until configuration is supplied.
  #[error("store not configured: endpoint and access key are required")]
  NotConfigured,

  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The store answered with a non-success status.
  #[error("store rejected request ({status}): {message}")]
  Rejected {
    status:  StatusCode,
    message: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
