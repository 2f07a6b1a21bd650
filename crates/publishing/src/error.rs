//! Errors raised while presenting or sending content.

use herald_core::types::DbId;

/// Errors from the Publishing API HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum PublishingApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Publishing API returned a non-2xx status code.
    #[error("Publishing API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Errors from publish/republish dispatch.
#[derive(Debug, thiserror::Error)]
pub enum PublishingError {
    /// The record is not in a publicly visible state, so it cannot be
    /// republished. Raised before any request is sent.
    #[error("{kind} {id} is not publicly visible and cannot be republished")]
    UnpublishableInstance { kind: &'static str, id: DbId },

    /// Sending one of the locale payloads failed.
    #[error(transparent)]
    Api(#[from] PublishingApiError),
}
