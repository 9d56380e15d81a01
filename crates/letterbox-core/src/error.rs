//! Error type for `letterbox-core`.

use thiserror::Error;
use uuid::Uuid;

/// The gateway's failure taxonomy.
///
/// Transport failures and store rejections are deliberately collapsed into
/// [`Error::Store`]: the caller gets one human-readable message and cannot
/// tell the two apart. Validation failures never reach the store at all.
#[derive(Debug, Error)]
pub enum Error {
  /// The input failed client-side validation; no write was attempted.
  #[error("invalid submission: {0}")]
  Validation(String),

  /// The store reported an error or could not be reached.
  #[error("{0}")]
  Store(String),

  /// A status update matched no row.
  #[error("submission not found: {0}")]
  NotFound(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
