//! Outbound HTTP client setup.

mod client;

pub use client::{DEFAULT_TIMEOUT_SECS, build_client};
