// src/core/client.rs

use crate::core::models::AnalysisResponse;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

/// Fixed endpoint path on the backend.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Where the local backend runner listens by default.
pub const DEFAULT_BACKEND: &str = "http://127.0.0.1:3000";

/// The two user-visible failure categories of the analyze flow.
///
/// `Connection` deliberately collapses every transport and parsing failure
/// into one generic message; the underlying detail is kept for the log only.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please capture or select an image first!")]
    NoImageSelected,
    #[error("Connection Error: Is the backend running?")]
    Connection(String),
}

/// What the scan task sends back to the UI loop.
pub type AnalysisOutcome = Result<AnalysisResponse, UploadError>;

/// Uploads the selected image to the backend and parses its assessment.
///
/// The precondition is checked first: an empty path, or one that does not
/// point at a readable file, aborts with `NoImageSelected` before any socket
/// work. The file is then posted as multipart form data under the field name
/// `image` and the body parsed as JSON, with missing fields defaulting.
///
/// There is no timeout, no retry and no mutual exclusion: concurrent calls
/// proceed independently and the caller decides which result to keep.
pub async fn run_analysis(base_url: &str, image_path: &Path) -> AnalysisOutcome {
    if image_path.as_os_str().is_empty() || !image_path.is_file() {
        return Err(UploadError::NoImageSelected);
    }

    let bytes = tokio::fs::read(image_path)
        .await
        .map_err(|_| UploadError::NoImageSelected)?;
    let file_name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".to_string());
    info!(path = %image_path.display(), bytes = bytes.len(), "Uploading image for analysis.");

    let client = reqwest::Client::builder()
        .user_agent("BactiSee/0.1")
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client.");
            UploadError::Connection(e.to_string())
        })?;

    let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));
    let url = format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH);

    let response = client.post(&url).multipart(form).send().await.map_err(|e| {
        error!(url = %url, error = %e, "Analysis request failed.");
        UploadError::Connection(e.to_string())
    })?;
    info!(status = %response.status(), "Received analysis response.");

    // Non-2xx is not special-cased: the backend's error bodies are JSON too,
    // and their missing fields default to the safe presentation.
    response.json::<AnalysisResponse>().await.map_err(|e| {
        error!(error = %e, "Analysis response was not valid JSON.");
        UploadError::Connection(e.to_string())
    })
}
