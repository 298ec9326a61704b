//! Error types for the market data SDK

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching data from the remote market API
///
/// These only surface below the [`MarketDashboard`](crate::MarketDashboard)
/// boundary; the dashboard absorbs every variant into its empty/absent
/// sentinel plus a user notice.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed (DNS, connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote API answered with a non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Creates an InvalidResponse error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
