//! Hosted-store backend for the Letterbox submission store.
//!
//! Speaks the hosted store's REST dialect (PostgREST) over HTTPS, authenticated
//! with an access key. The store itself is an opaque collaborator — this crate
//! is only a client for it.

mod store;

pub mod config;
pub mod error;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use store::RestStore;
