//! The `SubmissionStore` trait.
//!
//! The trait is implemented by storage backends (`letterbox-store-rest` for
//! the hosted store, [`MemoryStore`](crate::memory::MemoryStore) for tests
//! and local development). The gateway depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::submission::{ContactSubmission, SubmissionRecord, SubmissionStatus};

/// Abstraction over a submission storage backend.
///
/// Submissions are written once and never deleted; the only mutation is the
/// status patch. All methods return `Send` futures so the trait can be used
/// in multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SubmissionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist one record and return the inserted row(s), with the
  /// store-assigned `id` filled in.
  fn insert(
    &self,
    record: SubmissionRecord,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;

  /// All submissions, ordered by `created_at` descending.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;

  /// Patch one row's `status` by id and return the updated row(s).
  ///
  /// An unknown id yields `Ok(vec![])` — the hosted store filters first and
  /// updates whatever matched, so "nothing matched" is not an error at this
  /// layer. The gateway turns the empty result into a not-found error.
  fn update_status(
    &self,
    id: Uuid,
    status: SubmissionStatus,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;
}
