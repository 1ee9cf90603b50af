use thiserror::Error;

use crate::http_client::{HttpError, HttpErrorKind};

/// Top-level error type for enrichment operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("rate limiter was closed while the call was waiting")]
    Shutdown,
}

impl EnrichmentError {
    pub fn missing_api_key() -> Self {
        Self::Configuration(String::from(
            "enrichment client is missing required \"api_key\"",
        ))
    }

    pub(crate) fn from_http(error: HttpError, timeout_ms: u64) -> Self {
        match error.kind() {
            HttpErrorKind::Timeout => Self::Timeout { timeout_ms },
            HttpErrorKind::Connect | HttpErrorKind::Other => {
                Self::Transport(error.message().to_owned())
            }
        }
    }

    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = EnrichmentError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_transport_error_maps_to_timeout_variant() {
        let error = EnrichmentError::from_http(HttpError::timeout("deadline elapsed"), 30_000);
        assert_eq!(error, EnrichmentError::Timeout { timeout_ms: 30_000 });
        assert!(error.is_timeout());
    }

    #[test]
    fn connect_failure_maps_to_transport_variant() {
        let error = EnrichmentError::from_http(HttpError::connect("connection refused"), 1_000);
        assert_eq!(
            error,
            EnrichmentError::Transport(String::from("connection refused"))
        );
        assert_eq!(error.status(), None);
    }
}
