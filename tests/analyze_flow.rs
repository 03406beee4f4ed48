// tests/analyze_flow.rs
//
// End-to-end coverage of the analyze flow: the upload client talking to the
// real backend router bound to an ephemeral port.

use std::path::{Path, PathBuf};

use axum::{routing::post, Router};
use bactisee::core::client::{self, UploadError};
use bactisee::core::models::{gauge_width, SafetyLevel};
use bactisee::server;
use image::{Rgb, RgbImage};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Binds the given router to an ephemeral port and returns its base URL.
async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test backend");
    });
    format!("http://{}", addr)
}

async fn spawn_backend() -> String {
    spawn(server::router()).await
}

/// A 100x100 black surface with the first `n` pixels pure red. Saturated
/// speckles are never mistaken for glare, so exactly `n` pixels count.
fn speckled_image(n: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]));
    for i in 0..n {
        img.put_pixel(i % 100, i / 100, Rgb([255, 0, 0]));
    }
    img
}

fn write_png(dir: &TempDir, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).expect("write test image");
    path
}

#[tokio::test]
async fn heavy_contamination_comes_back_as_danger() {
    let base = spawn_backend().await;
    let dir = TempDir::new().expect("temp dir");
    let path = write_png(&dir, "dirty.png", &speckled_image(1000));

    let response = client::run_analysis(&base, &path).await.expect("analysis");
    assert_eq!(response.safety_level, SafetyLevel::Danger);
    assert_eq!(response.percentage, 10.0);
    assert_eq!(response.bacteria_count, Some(1000));
    assert_eq!(gauge_width(response.percentage), 50);
}

#[tokio::test]
async fn trace_contamination_comes_back_as_warning() {
    let base = spawn_backend().await;
    let dir = TempDir::new().expect("temp dir");
    let path = write_png(&dir, "trace.png", &speckled_image(500));

    let response = client::run_analysis(&base, &path).await.expect("analysis");
    assert_eq!(response.safety_level, SafetyLevel::Warning);
    assert_eq!(response.percentage, 5.0);
}

#[tokio::test]
async fn clean_surface_comes_back_as_safe() {
    let base = spawn_backend().await;
    let dir = TempDir::new().expect("temp dir");
    let path = write_png(&dir, "clean.png", &speckled_image(0));

    let response = client::run_analysis(&base, &path).await.expect("analysis");
    assert_eq!(response.safety_level, SafetyLevel::Safe);
    assert_eq!(response.percentage, 0.0);
    assert_eq!(gauge_width(response.percentage), 0);
}

#[tokio::test]
async fn no_selection_never_reaches_the_backend() {
    let base = spawn_backend().await;
    let outcome = client::run_analysis(&base, Path::new("")).await;
    assert!(matches!(outcome, Err(UploadError::NoImageSelected)));
}

#[tokio::test]
async fn undecodable_upload_defaults_to_the_safe_presentation() {
    // The backend answers 500 with a JSON error body. The client does not
    // special-case the status: the body parses and its fields default.
    let base = spawn_backend().await;
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"not an image at all").expect("write garbage");

    let response = client::run_analysis(&base, &path).await.expect("parsed error body");
    assert_eq!(response.safety_level, SafetyLevel::Safe);
    assert_eq!(response.percentage, 0.0);
}

#[tokio::test]
async fn missing_image_part_is_rejected_with_400() {
    let base = spawn_backend().await;
    let form = reqwest::multipart::Form::new().text("note", "no image here");
    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .multipart(form)
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "No image file provided");
}

#[tokio::test]
async fn non_json_backend_is_a_connection_error() {
    let base = spawn(Router::new().route("/api/analyze", post(|| async { "plain text" }))).await;
    let dir = TempDir::new().expect("temp dir");
    let path = write_png(&dir, "clean.png", &speckled_image(0));

    let outcome = client::run_analysis(&base, &path).await;
    match outcome {
        Err(UploadError::Connection(_)) => {}
        other => panic!("expected a connection error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_connection_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_png(&dir, "clean.png", &speckled_image(0));

    // Nothing listens on the discard port.
    let outcome = client::run_analysis("http://127.0.0.1:9", &path).await;
    assert!(matches!(outcome, Err(UploadError::Connection(_))));
}

#[tokio::test]
async fn overlapping_scans_resolve_independently() {
    // No mutual exclusion and no de-duplication: two in-flight uploads both
    // complete on their own.
    let base = spawn_backend().await;
    let dir = TempDir::new().expect("temp dir");
    let dirty = write_png(&dir, "dirty.png", &speckled_image(1000));
    let clean = write_png(&dir, "clean.png", &speckled_image(0));

    let (first, second) = tokio::join!(
        client::run_analysis(&base, &dirty),
        client::run_analysis(&base, &clean),
    );
    assert_eq!(first.expect("first scan").safety_level, SafetyLevel::Danger);
    assert_eq!(second.expect("second scan").safety_level, SafetyLevel::Safe);
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let base = spawn_backend().await;
    let body = reqwest::get(format!("{}/api/health", base))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert_eq!(body, "OK");
}
