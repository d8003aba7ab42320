//! HTTP transport for signed API calls.
//!
//! This crate provides:
//!
//! - The `HttpTransport` trait: GET with a query string, POST with a JSON
//!   body, both with a per-request timeout
//! - `RestClient`, a thin wrapper around `reqwest` implementing it
//! - Transport error classification via `RestError`
//!
//! Responses come back as raw status and body; interpreting them is left to
//! the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{HttpTransport, RestClient};
//! use std::time::Duration;
//!
//! let client = RestClient::new()?;
//! let response = client
//!     .get("https://api.example.com/api/ping", &[], Duration::from_secs(2))
//!     .await?;
//! assert!(response.is_success());
//! ```

mod client;
mod error;
mod transport;

pub use client::RestClient;
pub use error::RestError;
pub use transport::{HttpMethod, HttpResponse, HttpTransport};
