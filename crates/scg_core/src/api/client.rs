//! The analysis service client.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::{AnalysisReport, SwingView};

use super::error::{parse_error_detail, ApiError, ApiResult};

/// Default endpoint of a locally running analysis backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/swings";

/// Health probe response body shape: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

/// Client for the swing analysis backend.
///
/// Wraps a [`reqwest::Client`] and the configured endpoint URL. One call to
/// [`analyze_swing`](Self::analyze_swing) issues exactly one request; there
/// is no retry and no timeout, so an unresponsive server keeps the request
/// pending indefinitely.
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The configured analysis endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The service root URL (endpoint with its path stripped), used for the
    /// health probe.
    pub fn service_root(&self) -> String {
        service_root_of(&self.endpoint)
    }

    /// Upload both swing videos and return the decoded report.
    ///
    /// Both files are read fully into memory and sent as multipart form
    /// data under the fixed field names the backend expects.
    pub async fn analyze_swing(&self, dtl: &Path, fo: &Path) -> ApiResult<AnalysisReport> {
        info!(
            "Uploading swing videos to {} (dtl: {}, fo: {})",
            self.endpoint,
            dtl.display(),
            fo.display()
        );

        let form = Form::new()
            .part(SwingView::DownTheLine.field_name(), video_part(dtl).await?)
            .part(SwingView::FaceOn.field_name(), video_part(fo).await?);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Analysis request rejected with HTTP {}", status);
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail: parse_error_detail(&body),
            });
        }

        let report: AnalysisReport = serde_json::from_str(&body)?;
        debug!(
            "Analysis succeeded with {} diagnosed fault(s)",
            report.diagnosed_faults.len()
        );
        Ok(report)
    }

    /// Probe the service root and return its status message.
    pub async fn health_check(&self) -> ApiResult<String> {
        let url = self.service_root();
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail: parse_error_detail(&body),
            });
        }

        let health: HealthResponse = serde_json::from_str(&body)?;
        Ok(health.message)
    }
}

/// Read a video file into a multipart part carrying its file name.
async fn video_part(path: &Path) -> ApiResult<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::ReadVideo {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());

    Ok(Part::bytes(bytes).file_name(file_name))
}

/// Strip the path from an endpoint URL, keeping scheme and authority.
fn service_root_of(endpoint: &str) -> String {
    let after_scheme = endpoint.find("://").map(|i| i + 3).unwrap_or(0);
    match endpoint[after_scheme..].find('/') {
        Some(i) => endpoint[..after_scheme + i + 1].to_string(),
        None => format!("{endpoint}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn service_root_strips_endpoint_path() {
        assert_eq!(
            service_root_of("http://127.0.0.1:8000/api/swings"),
            "http://127.0.0.1:8000/"
        );
        assert_eq!(
            service_root_of("https://coach.example.com/api/swings"),
            "https://coach.example.com/"
        );
        assert_eq!(service_root_of("http://localhost:9000"), "http://localhost:9000/");
    }

    #[test]
    fn client_keeps_configured_endpoint() {
        let client = ApiClient::new(DEFAULT_ENDPOINT);
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.service_root(), "http://127.0.0.1:8000/");
    }

    #[tokio::test]
    async fn video_part_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swing_dtl.mp4");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not really a video").unwrap();

        let part = video_part(&path).await;
        assert!(part.is_ok());
    }

    #[tokio::test]
    async fn video_part_reports_missing_file() {
        let err = video_part(Path::new("/nonexistent/swing.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReadVideo { .. }));
    }
}
