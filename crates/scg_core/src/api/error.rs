//! Error types for backend requests.

use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Fallback message when a failure response carries no parseable detail.
pub const GENERIC_ERROR_DETAIL: &str = "An unknown error occurred.";

/// Errors from talking to the analysis service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A selected video file could not be read; no request was issued.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadVideo { path: PathBuf, source: io::Error },

    /// The request could not complete (connection refused, DNS, etc.).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. `detail` is the
    /// server-provided message when the body was parseable, else the
    /// generic fallback. Displayed verbatim.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// A success response body was not a valid report.
    #[error("Failed to decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure response body shape: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Extract the `detail` string from a failure body, falling back to the
/// generic message when the body is not JSON or has no such field.
pub(crate) fn parse_error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| GENERIC_ERROR_DETAIL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_detail_verbatim() {
        let err = ApiError::Api {
            status: 400,
            detail: "video too short".to_string(),
        };
        assert_eq!(err.to_string(), "video too short");
    }

    #[test]
    fn parse_error_detail_extracts_field() {
        assert_eq!(
            parse_error_detail(r#"{"detail": "video too short"}"#),
            "video too short"
        );
    }

    #[test]
    fn parse_error_detail_falls_back_on_garbage() {
        assert_eq!(parse_error_detail("<html>502 Bad Gateway</html>"), GENERIC_ERROR_DETAIL);
        assert_eq!(parse_error_detail(""), GENERIC_ERROR_DETAIL);
        assert_eq!(parse_error_detail(r#"{"message": "wrong key"}"#), GENERIC_ERROR_DETAIL);
    }

    #[test]
    fn read_video_error_names_the_file() {
        let err = ApiError::ReadVideo {
            path: PathBuf::from("/tmp/swing_dtl.mp4"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("swing_dtl.mp4"));
        assert!(msg.contains("no such file"));
    }
}
