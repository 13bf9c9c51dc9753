//! Analysis report type definitions
//!
//! Shared by the CLI, desktop, and web frontends:
//! - FreshnessReport: the JSON record returned by the analysis endpoint
//! - ServiceStatus: payload of the service root route
//! - SavedReport: one analyzed image as written to disk

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tier::Tier;

/// Canonical analysis endpoint (the Flask backend's freshness route)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze-freshness";

/// Canonical multipart field name the endpoint reads the image bytes from
pub const DEFAULT_UPLOAD_FIELD: &str = "image";

/// Request timeout applied by the native HTTP clients
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// One analysis result, as returned by the endpoint.
///
/// The service has shipped several response shapes over time; the client
/// cannot know which backend revision is live, so all of them deserialize
/// through this untagged enum. A body matching none of the shapes is a
/// parse failure, not a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FreshnessReport {
    /// Label classifier output: a verdict plus per-label confidence percentages
    Classification {
        status: String,
        confidence: f64,
        predictions: BTreeMap<String, f64>,
    },

    /// Scored output with a verdict label; `brightness` is not sent by every backend
    Scored {
        freshness_score: f64,
        status: String,
        spots_detected: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        brightness: Option<f64>,
    },

    /// The oldest shape: bare numbers, later revisions added the label
    Legacy {
        freshness: f64,
        spots: u32,
        brightness: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<String>,
    },
}

impl FreshnessReport {
    /// Severity bucket for the report as a whole.
    ///
    /// The service's own label wins when present; the score thresholds only
    /// apply to label-less legacy records.
    pub fn tier(&self) -> Tier {
        match self {
            FreshnessReport::Classification { status, .. } => Tier::from_label(status),
            FreshnessReport::Scored { status, .. } => Tier::from_label(status),
            FreshnessReport::Legacy {
                status: Some(label),
                ..
            } => Tier::from_label(label),
            FreshnessReport::Legacy { freshness, .. } => Tier::from_score(*freshness),
        }
    }

    /// The verdict label, derived from the tier when the record carries none.
    pub fn status_label(&self) -> String {
        match self {
            FreshnessReport::Classification { status, .. } => status.clone(),
            FreshnessReport::Scored { status, .. } => status.clone(),
            FreshnessReport::Legacy {
                status: Some(label),
                ..
            } => label.clone(),
            FreshnessReport::Legacy { .. } => self.tier().label().to_string(),
        }
    }
}

/// Payload of `GET /` on the analysis service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
    pub routes: Vec<String>,
}

/// One analyzed image, as written by `--output` and the desktop save button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    /// EXIF capture date, empty when the image carries none
    #[serde(default)]
    pub captured_at: String,

    #[serde(default)]
    pub analyzed_at: String,

    pub report: FreshnessReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classification_variant() {
        let body = r#"{
            "status": "Slightly Aging",
            "confidence": 73.2,
            "predictions": {"Fresh": 20.1, "Slightly Aging": 73.2, "Expiring Soon": 6.7}
        }"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        match &report {
            FreshnessReport::Classification {
                status,
                confidence,
                predictions,
            } => {
                assert_eq!(status, "Slightly Aging");
                assert_eq!(*confidence, 73.2);
                assert_eq!(predictions.len(), 3);
                assert_eq!(predictions["Fresh"], 20.1);
            }
            other => panic!("expected Classification, got {:?}", other),
        }
        assert_eq!(report.tier(), Tier::Aging);
    }

    #[test]
    fn test_parse_scored_variant_without_brightness() {
        // exactly what the Flask backend returns
        let body = r#"{"freshness_score": 80, "status": "Fresh", "spots_detected": 0}"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        match &report {
            FreshnessReport::Scored {
                freshness_score,
                status,
                spots_detected,
                brightness,
            } => {
                assert_eq!(*freshness_score, 80.0);
                assert_eq!(status, "Fresh");
                assert_eq!(*spots_detected, 0);
                assert!(brightness.is_none());
            }
            other => panic!("expected Scored, got {:?}", other),
        }
        assert_eq!(report.tier(), Tier::Fresh);
    }

    #[test]
    fn test_parse_scored_variant_with_brightness() {
        let body =
            r#"{"freshness_score": 55.5, "status": "Expiring", "spots_detected": 7, "brightness": 96.0}"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        match report {
            FreshnessReport::Scored { brightness, .. } => assert_eq!(brightness, Some(96.0)),
            other => panic!("expected Scored, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_legacy_variant_without_status() {
        let body = r#"{"freshness": 85, "spots": 2, "brightness": 120}"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        match &report {
            FreshnessReport::Legacy {
                freshness,
                spots,
                brightness,
                status,
            } => {
                assert_eq!(*freshness, 85.0);
                assert_eq!(*spots, 2);
                assert_eq!(*brightness, 120.0);
                assert!(status.is_none());
            }
            other => panic!("expected Legacy, got {:?}", other),
        }
        // no label: the score thresholds decide
        assert_eq!(report.tier(), Tier::Fresh);
        assert_eq!(report.status_label(), "Fresh");
    }

    #[test]
    fn test_parse_legacy_variant_with_status() {
        let body = r#"{"freshness": 90, "spots": 1, "brightness": 110, "status": "Expiring"}"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        match &report {
            FreshnessReport::Legacy { status, .. } => {
                assert_eq!(status.as_deref(), Some("Expiring"));
            }
            other => panic!("expected Legacy, got {:?}", other),
        }
        // the label wins over the 90-point score
        assert_eq!(report.tier(), Tier::Expiring);
    }

    #[test]
    fn test_label_wins_over_score() {
        let body =
            r#"{"freshness_score": 95, "status": "Slightly Aging", "spots_detected": 3}"#;
        let report: FreshnessReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.tier(), Tier::Aging);
        assert_eq!(report.status_label(), "Slightly Aging");
    }

    #[test]
    fn test_partial_record_is_rejected() {
        let body = r#"{"freshness": 12}"#;
        assert!(serde_json::from_str::<FreshnessReport>(body).is_err());
    }

    #[test]
    fn test_service_status_defaults() {
        let status: ServiceStatus = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert_eq!(status.status, "success");
        assert!(status.message.is_empty());
        assert!(status.routes.is_empty());
    }

    #[test]
    fn test_saved_report_field_names() {
        let saved = SavedReport {
            file_name: "apple.jpg".to_string(),
            file_path: "/photos/apple.jpg".to_string(),
            captured_at: String::new(),
            analyzed_at: "2026-08-06T10:00:00+00:00".to_string(),
            report: FreshnessReport::Scored {
                freshness_score: 80.0,
                status: "Fresh".to_string(),
                spots_detected: 0,
                brightness: None,
            },
        };
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.contains("\"fileName\":\"apple.jpg\""));
        assert!(json.contains("\"analyzedAt\""));
        assert!(json.contains("\"freshness_score\":80.0"));
        assert!(!json.contains("brightness"));
    }
}
