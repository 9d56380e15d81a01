//! Core types and trait definitions for the Letterbox submission backend.
//!
//! This crate is deliberately free of HTTP and network dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod gateway;
pub mod memory;
pub mod store;
pub mod submission;

pub use error::{Error, Result};
pub use gateway::SubmissionGateway;
