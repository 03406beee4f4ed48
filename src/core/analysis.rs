// src/core/analysis.rs

use crate::core::models::{classify, SafetyLevel};
use image::RgbImage;
use tracing::{debug, info};

// Adaptive threshold based on the image's brightness distribution.
pub const ADAPTIVE_STD_MULTIPLIER: f32 = 0.8;

// Glare guard tuning: very bright, low saturation, low texture.
pub const GLARE_BRIGHT_STD_MULTIPLIER: f32 = 1.5;
pub const GLARE_SATURATION_MAX: f32 = 20.0;
pub const GLARE_CONTRAST_MAX: f32 = 10.0;

/// The outcome of analyzing one surface image.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceAssessment {
    pub bacteria_count: u64,
    pub percentage: f64,
    pub safety_level: SafetyLevel,
}

/// Decodes an uploaded image and assesses it.
///
/// Decoding failures propagate to the caller; the HTTP layer maps them to the
/// generic error response.
pub fn assess_image(bytes: &[u8]) -> Result<SurfaceAssessment, image::ImageError> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    Ok(assess_pixels(&rgb))
}

/// Assesses a decoded RGB image.
///
/// A pixel counts as contamination when its luminance exceeds an adaptive
/// threshold (`mean + 0.8 * std`) and it does not look like specular glare.
/// Glare is bright (`mean + 1.5 * std`), desaturated (max-min channel below
/// 20) and flat (sum of horizontal and vertical luminance gradients below 10,
/// edge rows/columns replicated).
pub fn assess_pixels(img: &RgbImage) -> SurfaceAssessment {
    let (width, height) = img.dimensions();
    let (w, h) = (width as usize, height as usize);
    let total = w * h;
    if total == 0 {
        return SurfaceAssessment {
            bacteria_count: 0,
            percentage: 0.0,
            safety_level: SafetyLevel::Safe,
        };
    }

    let mut gray = vec![0f32; total];
    let mut saturation = vec![0f32; total];
    for (i, px) in img.pixels().enumerate() {
        let [r, g, b] = px.0;
        let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
        gray[i] = 0.299 * r + 0.587 * g + 0.114 * b;
        saturation[i] = r.max(g).max(b) - r.min(g).min(b);
    }

    let mean = gray.iter().sum::<f32>() / total as f32;
    let variance = gray.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / total as f32;
    let std = variance.sqrt();

    let adaptive_threshold = mean + ADAPTIVE_STD_MULTIPLIER * std;
    let glare_brightness = mean + GLARE_BRIGHT_STD_MULTIPLIER * std;
    debug!(mean, std, adaptive_threshold, "Computed brightness statistics.");

    let mut bacteria_count: u64 = 0;
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if gray[i] <= adaptive_threshold {
                continue;
            }

            // Gradients use the neighbor to the right/below; the last
            // column/row reuses the previous one (edge replication).
            let gx = if w >= 2 {
                let xa = x.min(w - 2);
                (gray[y * w + xa + 1] - gray[y * w + xa]).abs()
            } else {
                0.0
            };
            let gy = if h >= 2 {
                let ya = y.min(h - 2);
                (gray[(ya + 1) * w + x] - gray[ya * w + x]).abs()
            } else {
                0.0
            };

            let is_glare = gray[i] > glare_brightness
                && saturation[i] < GLARE_SATURATION_MAX
                && gx + gy < GLARE_CONTRAST_MAX;
            if !is_glare {
                bacteria_count += 1;
            }
        }
    }

    let raw_percentage = (bacteria_count as f64 / total as f64) * 100.0;
    let safety_level = classify(raw_percentage);
    // Round to two decimals for the report, after classification.
    let percentage = (raw_percentage * 100.0).round() / 100.0;

    info!(bacteria_count, percentage, level = %safety_level, "Surface assessed.");
    SurfaceAssessment {
        bacteria_count,
        percentage,
        safety_level,
    }
}
