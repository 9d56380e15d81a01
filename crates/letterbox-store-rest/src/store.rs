//! [`RestStore`] — the hosted-store implementation of [`SubmissionStore`].

use std::time::Duration;

use letterbox_core::{
  store::SubmissionStore,
  submission::{ContactSubmission, SubmissionRecord, SubmissionStatus},
};
use reqwest::{Client, RequestBuilder, Response};
use uuid::Uuid;

use crate::{
  config::StoreConfig,
  error::{Error, Result},
};

/// Table holding contact-form submissions.
const TABLE: &str = "contact_submissions";

/// Client for the hosted store's REST interface.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
///
/// Missing configuration is a deferred runtime failure, not a startup abort:
/// construction always succeeds (logging a warning), and each call returns
/// [`Error::NotConfigured`] until an endpoint and key are supplied.
#[derive(Clone)]
pub struct RestStore {
  client: Client,
  config: StoreConfig,
}

impl RestStore {
  pub fn new(config: StoreConfig) -> reqwest::Result<Self> {
    if !config.is_configured() {
      tracing::warn!(
        "store endpoint and/or access key not set; \
         submission calls will fail until both are configured"
      );
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  pub(crate) fn table_url(&self) -> String {
    format!(
      "{}/rest/v1/{TABLE}",
      self.config.endpoint.trim_end_matches('/')
    )
  }

  fn auth(&self, req: RequestBuilder) -> RequestBuilder {
    req
      .header("apikey", &self.config.access_key)
      .bearer_auth(&self.config.access_key)
  }

  fn ensure_configured(&self) -> Result<()> {
    if self.config.is_configured() {
      Ok(())
    } else {
      Err(Error::NotConfigured)
    }
  }
}

/// Pull the `message` field out of the store's JSON error body, falling back
/// to the raw body or the status line.
async fn rejection(resp: Response) -> Error {
  let status = resp.status();
  let body = resp.text().await.unwrap_or_default();
  let message = serde_json::from_str::<serde_json::Value>(&body)
    .ok()
    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
    .unwrap_or_else(|| {
      if body.trim().is_empty() {
        status.to_string()
      } else {
        body.clone()
      }
    });
  Error::Rejected { status, message }
}

async fn rows(resp: Response) -> Result<Vec<ContactSubmission>> {
  if !resp.status().is_success() {
    return Err(rejection(resp).await);
  }
  Ok(resp.json().await?)
}

impl SubmissionStore for RestStore {
  type Error = Error;

  /// `POST /rest/v1/contact_submissions` with `Prefer: return=representation`
  /// so the inserted row (with the store-assigned id) comes back.
  async fn insert(
    &self,
    record: SubmissionRecord,
  ) -> Result<Vec<ContactSubmission>> {
    self.ensure_configured()?;
    let resp = self
      .auth(self.client.post(self.table_url()))
      .header("Prefer", "return=representation")
      .json(&[record])
      .send()
      .await?;
    rows(resp).await
  }

  /// `GET /rest/v1/contact_submissions?select=*&order=created_at.desc`
  async fn list(&self) -> Result<Vec<ContactSubmission>> {
    self.ensure_configured()?;
    let resp = self
      .auth(self.client.get(self.table_url()))
      .query(&[("select", "*"), ("order", "created_at.desc")])
      .send()
      .await?;
    rows(resp).await
  }

  /// `PATCH /rest/v1/contact_submissions?id=eq.{id}` with a status-only
  /// patch body. A filter that matches nothing returns an empty row set,
  /// not an error.
  async fn update_status(
    &self,
    id: Uuid,
    status: SubmissionStatus,
  ) -> Result<Vec<ContactSubmission>> {
    self.ensure_configured()?;
    let resp = self
      .auth(self.client.patch(self.table_url()))
      .query(&[("id", format!("eq.{id}"))])
      .header("Prefer", "return=representation")
      .json(&serde_json::json!({ "status": status }))
      .send()
      .await?;
    rows(resp).await
  }
}
