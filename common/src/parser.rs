//! Analysis response parsing
//!
//! The endpoint returns a bare JSON record. Parsing is strict: a body that
//! matches none of the known report shapes is an error, never a partial
//! record. Revisions of the original page that skipped this check would
//! happily render error payloads as results.

use crate::error::{Error, Result};
use crate::types::{FreshnessReport, ServiceStatus};

/// Parse the body of a successful analysis response.
///
/// # Arguments
/// * `body` - the raw response text
///
/// # Returns
/// * `Ok(FreshnessReport)` - one of the recognized report shapes
/// * `Err` - malformed JSON or an unrecognized shape, with the serde
///   detail preserved for diagnostics
///
/// # Examples
/// ```
/// use freshscan_common::parse_report;
///
/// let body = r#"{"freshness_score": 80, "status": "Fresh", "spots_detected": 0}"#;
/// assert!(parse_report(body).is_ok());
/// ```
pub fn parse_report(body: &str) -> Result<FreshnessReport> {
    serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("unrecognized analysis response: {}", e)))
}

/// Parse the body of the service root route.
pub fn parse_service_status(body: &str) -> Result<ServiceStatus> {
    serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("unrecognized status response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_each_shape() {
        assert!(parse_report(r#"{"freshness": 85, "spots": 2, "brightness": 120}"#).is_ok());
        assert!(
            parse_report(r#"{"freshness_score": 80, "status": "Fresh", "spots_detected": 0}"#)
                .is_ok()
        );
        assert!(parse_report(
            r#"{"status": "Fresh", "confidence": 91.0, "predictions": {"Fresh": 91.0}}"#
        )
        .is_ok());
    }

    #[test]
    fn test_parse_report_tolerates_surrounding_whitespace() {
        let body = "\n  {\"freshness\": 70, \"spots\": 3, \"brightness\": 88}  \n";
        assert!(parse_report(body).is_ok());
    }

    #[test]
    fn test_parse_report_rejects_malformed_json() {
        let err = parse_report("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("unrecognized analysis response"));
    }

    #[test]
    fn test_parse_report_rejects_error_payload() {
        // a JSON body shaped like an error, not a report
        assert!(parse_report(r#"{"error": "no file part in request"}"#).is_err());
    }

    #[test]
    fn test_parse_report_rejects_partial_record() {
        assert!(parse_report(r#"{"freshness": 85, "spots": 2}"#).is_err());
    }

    #[test]
    fn test_parse_service_status() {
        let body = r#"{
            "status": "success",
            "message": "Image Analyzer backend is live 🚀",
            "routes": ["/", "/analyze-freshness (POST)"]
        }"#;
        let status = parse_service_status(body).unwrap();
        assert_eq!(status.status, "success");
        assert_eq!(status.routes.len(), 2);
    }
}
