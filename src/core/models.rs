// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::Display;

// --- Core Data Models ---

/// The three-way contamination verdict returned by the backend.
///
/// Only `"Danger"` and `"Warning"` are distinguished on the wire; any other
/// string, and a missing field, are treated as `Safe`. The variants serialize
/// back to the same literal strings the backend emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(from = "String")]
pub enum SafetyLevel {
    Danger,
    Warning,
    #[default]
    Safe,
}

impl From<String> for SafetyLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Danger" => SafetyLevel::Danger,
            "Warning" => SafetyLevel::Warning,
            _ => SafetyLevel::Safe,
        }
    }
}

impl SafetyLevel {
    /// Short operator guidance shown next to the verdict.
    pub fn guidance(&self) -> &'static str {
        match self {
            SafetyLevel::Danger => {
                "Contamination high. Sanitize the surface and rescan before use."
            }
            SafetyLevel::Warning => {
                "Trace detection. Rescan under fresh lighting to confirm the reading."
            }
            SafetyLevel::Safe => "Surface clean. No action required.",
        }
    }
}

/// Client-side view of the backend's JSON assessment.
///
/// Every field is optional on the wire: `percentage` defaults to 0 and
/// `safetyLevel` to `Safe`, so an error body (which carries neither) still
/// parses and lands on the safe presentation. `bacteriaCount` is a raw pixel
/// count the backend includes alongside the percentage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub safety_level: SafetyLevel,
    #[serde(default)]
    pub bacteria_count: Option<u64>,
}

/// Scales a contamination percentage for the gauge: 5x exaggeration so low
/// readings stay visible, saturating at a true reading of 20%.
pub fn gauge_width(percentage: f64) -> u16 {
    (percentage * 5.0).clamp(0.0, 100.0) as u16
}

/// Maps a raw contamination percentage to a verdict. In a typical room, a
/// couple of percent of bright pixels is normal noise; only a very high
/// reading is flagged as danger.
pub fn classify(percentage: f64) -> SafetyLevel {
    if percentage > 6.0 {
        SafetyLevel::Danger
    } else if percentage > 2.0 {
        SafetyLevel::Warning
    } else {
        SafetyLevel::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_safe_and_zero() {
        let response: AnalysisResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.percentage, 0.0);
        assert_eq!(response.safety_level, SafetyLevel::Safe);
        assert_eq!(response.bacteria_count, None);
        assert_eq!(gauge_width(response.percentage), 0);
    }

    #[test]
    fn known_levels_parse_exactly() {
        let danger: AnalysisResponse =
            serde_json::from_str(r#"{"percentage": 7.5, "safetyLevel": "Danger"}"#).unwrap();
        assert_eq!(danger.safety_level, SafetyLevel::Danger);
        assert_eq!(danger.percentage, 7.5);

        let warning: AnalysisResponse =
            serde_json::from_str(r#"{"safetyLevel": "Warning"}"#).unwrap();
        assert_eq!(warning.safety_level, SafetyLevel::Warning);
    }

    #[test]
    fn unrecognized_level_is_treated_as_safe() {
        let response: AnalysisResponse =
            serde_json::from_str(r#"{"safetyLevel": "Hazardous"}"#).unwrap();
        assert_eq!(response.safety_level, SafetyLevel::Safe);
    }

    #[test]
    fn error_body_parses_with_defaults() {
        // The backend's 500 path returns {"status": "error", "message": ...}.
        let response: AnalysisResponse =
            serde_json::from_str(r#"{"status": "error", "message": "boom"}"#).unwrap();
        assert_eq!(response.safety_level, SafetyLevel::Safe);
        assert_eq!(response.percentage, 0.0);
    }

    #[test]
    fn gauge_width_scales_five_times_and_saturates() {
        assert_eq!(gauge_width(0.0), 0);
        assert_eq!(gauge_width(10.0), 50);
        assert_eq!(gauge_width(20.0), 100);
        assert_eq!(gauge_width(30.0), 100);
        assert_eq!(gauge_width(-1.0), 0);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(0.0), SafetyLevel::Safe);
        assert_eq!(classify(2.0), SafetyLevel::Safe);
        assert_eq!(classify(2.1), SafetyLevel::Warning);
        assert_eq!(classify(6.0), SafetyLevel::Warning);
        assert_eq!(classify(6.1), SafetyLevel::Danger);
    }
}
