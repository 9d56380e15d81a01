//! Submission types — the single persisted entity of the system.
//!
//! A submission is immutable once created except for its [`SubmissionStatus`],
//! which is moved along the admin workflow through a separate operation. The
//! caller supplies only the four form fields; `status` and `created_at` are
//! stamped by the gateway, and `id` is assigned by the store on insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Where a submission sits in the admin workflow.
///
/// Every record starts as `New`. Any status may move to any other — the
/// workflow imposes no transition restrictions.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  #[default]
  New,
  Read,
  Replied,
}

/// The four fields collected by the contact form.
///
/// Validated by the gateway before anything is sent to the store: all fields
/// must be non-empty after trimming, and the email must be format-valid.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSubmission {
  #[validate(length(min = 1, message = "name must not be empty"))]
  pub name:    String,
  #[validate(email(message = "email address is not valid"))]
  pub email:   String,
  #[validate(length(min = 1, message = "subject must not be empty"))]
  pub subject: String,
  #[validate(length(min = 1, message = "message must not be empty"))]
  pub message: String,
}

impl NewSubmission {
  /// Strip surrounding whitespace from every field, so that a blank-but-
  /// padded field fails the non-empty checks.
  pub fn trimmed(self) -> Self {
    Self {
      name:    self.name.trim().to_string(),
      email:   self.email.trim().to_string(),
      subject: self.subject.trim().to_string(),
      message: self.message.trim().to_string(),
    }
  }

  /// Stamp the input into an insertable record: `status` starts at `New` and
  /// `created_at` is the moment of submission.
  pub fn into_record(self, created_at: DateTime<Utc>) -> SubmissionRecord {
    SubmissionRecord {
      name: self.name,
      email: self.email,
      subject: self.subject,
      message: self.message,
      status: SubmissionStatus::New,
      created_at,
    }
  }
}

/// The insert payload — everything except the store-assigned `id`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub status:     SubmissionStatus,
  pub created_at: DateTime<Utc>,
}

/// A persisted contact-form submission, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub status:     SubmissionStatus,
  pub created_at: DateTime<Utc>,
}
