//! The submission gateway — the uniform success/failure boundary between the
//! contact form and the external store.
//!
//! Every operation resolves to the two-case contract: `Ok(rows)` or an
//! [`Error`] carrying a human-readable message. Store failures of any kind
//! (transport, rejection, missing configuration) are caught here and
//! normalised; nothing propagates past this boundary as a panic.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate as _;

use crate::{
  error::{Error, Result},
  store::SubmissionStore,
  submission::{ContactSubmission, NewSubmission, SubmissionStatus},
};

/// Stateless bridge from form input to durable storage.
///
/// Holds no cache and no mutable state — the store's row set is the only
/// state in the system. Constructed once at process start with an injected
/// backend, so tests can substitute an in-memory or failing store.
pub struct SubmissionGateway<S: SubmissionStore> {
  store: Arc<S>,
}

impl<S: SubmissionStore> SubmissionGateway<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  /// Validate `input`, stamp it with `status = new` and the current UTC
  /// time, and issue exactly one insert. No retry, no queueing, no local
  /// buffering when the store is unreachable.
  pub async fn submit(
    &self,
    input: NewSubmission,
  ) -> Result<Vec<ContactSubmission>> {
    let input = input.trimmed();
    input
      .validate()
      .map_err(|e| Error::Validation(flatten_validation(&e)))?;

    let record = input.into_record(Utc::now());
    self.store.insert(record).await.map_err(store_error)
  }

  /// All submissions, newest first.
  pub async fn list(&self) -> Result<Vec<ContactSubmission>> {
    self.store.list().await.map_err(store_error)
  }

  /// Set one submission's status. Any status may move to any other; the
  /// failure modes are an unknown id and store errors.
  pub async fn update_status(
    &self,
    id: Uuid,
    status: SubmissionStatus,
  ) -> Result<Vec<ContactSubmission>> {
    let rows = self
      .store
      .update_status(id, status)
      .await
      .map_err(store_error)?;
    if rows.is_empty() {
      return Err(Error::NotFound(id));
    }
    Ok(rows)
  }
}

fn store_error<E: std::error::Error>(e: E) -> Error {
  Error::Store(e.to_string())
}

/// Collapse `validator`'s per-field error map into one sorted line.
fn flatten_validation(errors: &validator::ValidationErrors) -> String {
  let mut parts = Vec::new();
  for (field, field_errors) in errors.field_errors() {
    for error in field_errors {
      match &error.message {
        Some(message) => parts.push(format!("{field}: {message}")),
        None => parts.push(format!("{field}: {}", error.code)),
      }
    }
  }
  parts.sort();
  parts.join("; ")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::memory::MemoryStore;
  use crate::submission::SubmissionRecord;
  use thiserror::Error;

  fn gateway() -> SubmissionGateway<MemoryStore> {
    SubmissionGateway::new(Arc::new(MemoryStore::new()))
  }

  fn input(name: &str, email: &str) -> NewSubmission {
    NewSubmission {
      name:    name.to_string(),
      email:   email.to_string(),
      subject: "Project inquiry".to_string(),
      message: "I would like to talk about a project.".to_string(),
    }
  }

  // ── Round-trip ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn submit_then_list_round_trips() {
    let gw = gateway();

    let rows = gw.submit(input("Ada", "ada@example.com")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, SubmissionStatus::New);
    assert!((Utc::now() - rows[0].created_at).num_seconds().abs() < 5);

    let listed = gw.list().await.unwrap();
    let found = listed
      .iter()
      .find(|r| r.id == rows[0].id)
      .expect("submitted row is listed");
    assert_eq!(found.name, "Ada");
    assert_eq!(found.email, "ada@example.com");
    assert_eq!(found.subject, "Project inquiry");
    assert_eq!(found.status, SubmissionStatus::New);
  }

  // ── Validation ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn submit_rejects_invalid_email() {
    let gw = gateway();
    let err = gw
      .submit(input("Ada", "not-an-address"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    // Nothing reached the store.
    assert!(gw.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn submit_rejects_whitespace_only_name() {
    let gw = gateway();
    let err = gw.submit(input("   ", "ada@example.com")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
  }

  #[tokio::test]
  async fn validation_message_names_the_field() {
    let gw = gateway();
    let err = gw.submit(input("Ada", "bad")).await.unwrap_err();
    assert!(err.to_string().contains("email"), "message: {err}");
  }

  // ── Failure normalisation ───────────────────────────────────────────────

  #[derive(Debug, Error)]
  #[error("connection refused")]
  struct Unreachable;

  /// A store whose every call fails, standing in for a network outage.
  struct FailStore;

  impl SubmissionStore for FailStore {
    type Error = Unreachable;

    async fn insert(
      &self,
      _record: SubmissionRecord,
    ) -> Result<Vec<ContactSubmission>, Unreachable> {
      Err(Unreachable)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, Unreachable> {
      Err(Unreachable)
    }

    async fn update_status(
      &self,
      _id: Uuid,
      _status: SubmissionStatus,
    ) -> Result<Vec<ContactSubmission>, Unreachable> {
      Err(Unreachable)
    }
  }

  #[tokio::test]
  async fn store_failure_is_normalised_not_panicked() {
    let gw = SubmissionGateway::new(Arc::new(FailStore));
    let err = gw.submit(input("Ada", "ada@example.com")).await.unwrap_err();
    match err {
      Error::Store(message) => assert_eq!(message, "connection refused"),
      other => panic!("expected Store error, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn list_failure_is_normalised() {
    let gw = SubmissionGateway::new(Arc::new(FailStore));
    assert!(matches!(gw.list().await.unwrap_err(), Error::Store(_)));
  }

  // ── Status mutation ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_status_changes_only_the_target_row() {
    let gw = gateway();
    let first  = gw.submit(input("Ada", "ada@example.com")).await.unwrap();
    let second = gw.submit(input("Grace", "grace@example.com")).await.unwrap();

    let updated = gw
      .update_status(first[0].id, SubmissionStatus::Replied)
      .await
      .unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].status, SubmissionStatus::Replied);

    let listed = gw.list().await.unwrap();
    for row in &listed {
      if row.id == first[0].id {
        assert_eq!(row.status, SubmissionStatus::Replied);
      } else {
        assert_eq!(row.id, second[0].id);
        assert_eq!(row.status, SubmissionStatus::New);
      }
    }
  }

  #[tokio::test]
  async fn update_status_unknown_id_is_not_found() {
    let gw = gateway();
    let id  = Uuid::new_v4();
    let err = gw
      .update_status(id, SubmissionStatus::Read)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NotFound(e) if e == id), "got {err:?}");
  }

  // ── Concurrency ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn concurrent_submissions_produce_two_distinct_rows() {
    let gw = gateway();
    let (a, b) = tokio::join!(
      gw.submit(input("Ada", "ada@example.com")),
      gw.submit(input("Grace", "grace@example.com")),
    );
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a[0].id, b[0].id);

    let listed = gw.list().await.unwrap();
    assert_eq!(listed.len(), 2);
  }
}
