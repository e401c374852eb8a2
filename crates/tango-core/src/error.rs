//! High-score gateway error types.
//!
//! Defined in `tango-core` so the game engine can log and absorb gateway
//! failures without depending on a concrete gateway implementation.

use thiserror::Error;

/// Errors that can occur when talking to a high-score gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway returned a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The gateway is deliberately unavailable (offline play, tests).
    #[error("gateway unavailable")]
    Unavailable,
}

impl GatewayError {
    /// Returns `true` if the failure came from the transport rather than the server.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::Timeout(_) | GatewayError::NetworkError(_) | GatewayError::Unavailable
        )
    }
}
