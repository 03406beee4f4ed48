// src/server/mod.rs

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::core::analysis;

// Phone camera uploads routinely exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Builds the backend router. Kept separate from `serve` so tests can bind it
/// to an ephemeral port.
pub fn router() -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Binds the listener and serves the analysis API until the task is aborted.
pub async fn serve(addr: SocketAddr) -> color_eyre::eyre::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("BactiSee backend listening on http://{}", addr);
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Receives a single image, extracts bright pixel data and returns a
/// contamination assessment.
async fn analyze(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let image = match read_image_field(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            info!("Rejected analyze request without an image part.");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No image file provided" })),
            );
        }
        Err(message) => {
            error!(error = %message, "Failed to read multipart body.");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": message })),
            );
        }
    };

    match analysis::assess_image(&image) {
        Ok(assessment) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "bacteriaCount": assessment.bacteria_count,
                "percentage": assessment.percentage,
                "safetyLevel": assessment.safety_level,
            })),
        ),
        Err(e) => {
            error!(error = %e, "Image could not be analyzed.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": e.to_string() })),
            )
        }
    }
}

/// Pulls the bytes of the `image` part out of the multipart body, if present.
async fn read_image_field(multipart: &mut Multipart) -> Result<Option<Bytes>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() == Some("image") {
            return field.bytes().await.map(Some).map_err(|e| e.to_string());
        }
    }
    Ok(None)
}
