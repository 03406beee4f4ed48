// src/core/mod.rs

// This file acts as the public interface for the `core` module.

/// The contamination analysis engine: adaptive brightness threshold with a
/// glare guard, operating on a decoded RGB image.
pub mod analysis;

/// The upload client: packages a selected image as multipart form data,
/// posts it to the backend and parses the JSON assessment.
pub mod client;

/// Data structures shared across the crate, such as `SafetyLevel` and the
/// wire-level `AnalysisResponse`.
pub mod models;
