// src/github/error.rs
// =============================================================================
// Errors raised by the GitHub API seam.
//
// The search controller decides what a failure means for the view. This
// type only records what went wrong on the wire.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("GitHub API returned HTTP {}", .0.as_u16())]
    Status(StatusCode),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(StatusCode::NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_only_for_404() {
        assert!(ApiError::Status(StatusCode::NOT_FOUND).is_not_found());
        assert!(!ApiError::Status(StatusCode::FORBIDDEN).is_not_found());
        assert!(!ApiError::Status(StatusCode::GONE).is_not_found());

        let decode = serde_json::from_str::<u32>("{").unwrap_err();
        assert!(!ApiError::Decode(decode).is_not_found());
    }

    #[test]
    fn test_status_message() {
        let err = ApiError::Status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "GitHub API returned HTTP 403");
    }
}
