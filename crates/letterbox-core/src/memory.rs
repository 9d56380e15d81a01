//! In-memory [`SubmissionStore`] backend.
//!
//! Reference implementation: rows live in a mutex-guarded vector and ids are
//! generated locally. Used by the gateway and API tests, and handy for
//! running the server without a hosted store.

use std::sync::Mutex;

use thiserror::Error;
use uuid::Uuid;

use crate::{
  store::SubmissionStore,
  submission::{ContactSubmission, SubmissionRecord, SubmissionStatus},
};

/// The only failure mode is a poisoned lock.
#[derive(Debug, Error)]
#[error("memory store error: {0}")]
pub struct MemoryStoreError(String);

#[derive(Default)]
pub struct MemoryStore {
  rows: Mutex<Vec<ContactSubmission>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(
    &self,
  ) -> Result<std::sync::MutexGuard<'_, Vec<ContactSubmission>>, MemoryStoreError>
  {
    self
      .rows
      .lock()
      .map_err(|_| MemoryStoreError("lock poisoned".to_string()))
  }
}

impl SubmissionStore for MemoryStore {
  type Error = MemoryStoreError;

  async fn insert(
    &self,
    record: SubmissionRecord,
  ) -> Result<Vec<ContactSubmission>, MemoryStoreError> {
    let row = ContactSubmission {
      id:         Uuid::new_v4(),
      name:       record.name,
      email:      record.email,
      subject:    record.subject,
      message:    record.message,
      status:     record.status,
      created_at: record.created_at,
    };
    self.lock()?.push(row.clone());
    Ok(vec![row])
  }

  async fn list(&self) -> Result<Vec<ContactSubmission>, MemoryStoreError> {
    let mut rows = self.lock()?.clone();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(rows)
  }

  async fn update_status(
    &self,
    id: Uuid,
    status: SubmissionStatus,
  ) -> Result<Vec<ContactSubmission>, MemoryStoreError> {
    let mut rows = self.lock()?;
    match rows.iter_mut().find(|row| row.id == id) {
      Some(row) => {
        row.status = status;
        Ok(vec![row.clone()])
      }
      None => Ok(vec![]),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, Utc};

  fn record(name: &str, minutes_ago: i64) -> SubmissionRecord {
    SubmissionRecord {
      name:       name.to_string(),
      email:      format!("{}@example.com", name.to_lowercase()),
      subject:    "Hello".to_string(),
      message:    "A message.".to_string(),
      status:     SubmissionStatus::New,
      created_at: Utc::now() - Duration::minutes(minutes_ago),
    }
  }

  #[tokio::test]
  async fn insert_assigns_distinct_ids() {
    let store = MemoryStore::new();
    let a = store.insert(record("Alice", 0)).await.unwrap();
    let b = store.insert(record("Bob", 0)).await.unwrap();
    assert_ne!(a[0].id, b[0].id);
  }

  #[tokio::test]
  async fn list_orders_newest_first() {
    let store = MemoryStore::new();
    store.insert(record("Oldest", 30)).await.unwrap();
    store.insert(record("Newest", 0)).await.unwrap();
    store.insert(record("Middle", 10)).await.unwrap();

    let rows = store.list().await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
  }

  #[tokio::test]
  async fn update_status_unknown_id_returns_empty() {
    let store = MemoryStore::new();
    store.insert(record("Alice", 0)).await.unwrap();

    let rows = store
      .update_status(Uuid::new_v4(), SubmissionStatus::Read)
      .await
      .unwrap();
    assert!(rows.is_empty());
  }

  #[tokio::test]
  async fn update_status_patches_matching_row() {
    let store = MemoryStore::new();
    let inserted = store.insert(record("Alice", 0)).await.unwrap();

    let rows = store
      .update_status(inserted[0].id, SubmissionStatus::Replied)
      .await
      .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, SubmissionStatus::Replied);
  }
}
