//! API error type and the failure half of the uniform envelope.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Serialised as `{"success":false,"error":<message>}` so the contact form
/// handles exactly one failure shape regardless of the underlying cause.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Gateway(#[from] letterbox_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use letterbox_core::Error;
    let status = match &self {
      ApiError::Gateway(Error::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Gateway(Error::NotFound(_)) => StatusCode::NOT_FOUND,
      ApiError::Gateway(Error::Store(_)) => StatusCode::BAD_GATEWAY,
    };
    (
      status,
      Json(json!({ "success": false, "error": self.to_string() })),
    )
      .into_response()
  }
}
