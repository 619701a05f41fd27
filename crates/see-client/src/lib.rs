//! # see-client
//!
//! HTTP SDK for the S.EE sharing API. One [`SeeClient`] owns one
//! [`ClientConfig`] and exposes the three resource verticals (URL
//! shortening, text sharing, file upload) plus their domain listings.
//! Every call runs under a per-request timeout and fails through the
//! [`SeeError`] taxonomy.

mod client;
mod config;
mod error;

pub use client::SeeClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{codes, ClientResult, SeeError};
