//! JSON API for Letterbox.
//!
//! Exposes an axum [`Router`] backed by any
//! [`SubmissionStore`](letterbox_core::store::SubmissionStore). Every response
//! body uses the uniform envelope the contact form consumes:
//! `{"success":true,"data":…}` on success and `{"success":false,"error":…}`
//! on failure.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let gateway = Arc::new(SubmissionGateway::new(Arc::new(store)));
//! let app = letterbox_api::router(gateway);
//! ```

pub mod config;
pub mod error;
pub mod submissions;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use letterbox_core::{SubmissionGateway, store::SubmissionStore};
use tower_http::trace::TraceLayer;

/// Build a fully-materialised API router for `gateway`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(gateway: Arc<SubmissionGateway<S>>) -> Router<()>
where
  S: SubmissionStore + 'static,
{
  Router::new()
    .route("/api/contact",                 post(submissions::submit::<S>))
    .route("/api/submissions",             get(submissions::list::<S>))
    .route("/api/submissions/{id}/status", post(submissions::update_status::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(gateway)
}
