//! Thin HTTP request helpers.
//!
//! Two independent components, feature-gated so either half can be compiled
//! out:
//!
//! - [`SyncClient`] (`sync` feature): blocking GET/POST over ureq with a
//!   per-instance connect timeout and generic body conversion. One
//!   short-lived agent per call, nothing shared.
//! - [`Client`] (`async` feature): GET/POST plus fire-and-forget
//!   [`enqueue`](Client::enqueue) over one shared reqwest client.
//!
//! Both raise [`Error`] rather than returning sentinels; no retries are
//! performed anywhere.

pub mod config;
pub mod convert;
pub mod error;

#[cfg(feature = "async")]
mod client;
#[cfg(feature = "sync")]
mod sync_client;

pub use config::{RequestOptions, DEFAULT_CONNECT_TIMEOUT_SECS};
pub use convert::Charset;
pub use error::{Error, Result};

#[cfg(feature = "async")]
pub use client::Client;
#[cfg(feature = "sync")]
pub use sync_client::SyncClient;
