//! Handlers for the contact and submissions endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/contact` | Public; body: the four form fields |
//! | `GET`  | `/api/submissions` | Admin; newest first |
//! | `POST` | `/api/submissions/:id/status` | Admin; body: `{"status":"read"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use letterbox_core::{
  SubmissionGateway,
  store::SubmissionStore,
  submission::{ContactSubmission, NewSubmission, SubmissionStatus},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// The success half of the uniform result envelope.
#[derive(Debug, Serialize)]
pub struct Envelope {
  pub success: bool,
  pub data:    Vec<ContactSubmission>,
}

fn ok(data: Vec<ContactSubmission>) -> Json<Envelope> {
  Json(Envelope { success: true, data })
}

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /api/contact` — body: `{"name":…,"email":…,"subject":…,"message":…}`
pub async fn submit<S>(
  State(gateway): State<Arc<SubmissionGateway<S>>>,
  Json(body): Json<NewSubmission>,
) -> Result<Json<Envelope>, ApiError>
where
  S: SubmissionStore,
{
  Ok(ok(gateway.submit(body).await?))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/submissions`
pub async fn list<S>(
  State(gateway): State<Arc<SubmissionGateway<S>>>,
) -> Result<Json<Envelope>, ApiError>
where
  S: SubmissionStore,
{
  Ok(ok(gateway.list().await?))
}

// ─── Update status ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: SubmissionStatus,
}

/// `POST /api/submissions/:id/status` — body: `{"status":"replied"}`
pub async fn update_status<S>(
  State(gateway): State<Arc<SubmissionGateway<S>>>,
  Path(id): Path<Uuid>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Envelope>, ApiError>
where
  S: SubmissionStore,
{
  Ok(ok(gateway.update_status(id, body.status).await?))
}
