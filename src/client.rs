//! HTTP client for the freshness analysis service
//!
//! One POST per image: the bytes go up as a single multipart part, the
//! response comes back as one JSON report. No retries, no caching; a
//! failure is reported and the caller moves on.

use crate::error::{FreshscanError, Result};
use crate::scanner::ImageInfo;
use freshscan_common::{parse_report, parse_service_status, FreshnessReport, ServiceStatus};
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Multipart field name the endpoint reads the image bytes from.
///
/// Two names exist in the wild; they are not interchangeable, so the
/// field is configuration rather than guesswork.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadField {
    #[default]
    Image,
    File,
}

impl UploadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadField::Image => "image",
            UploadField::File => "file",
        }
    }
}

impl std::str::FromStr for UploadField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(UploadField::Image),
            "file" => Ok(UploadField::File),
            _ => Err(format!("Unknown field: {}. Use image or file", s)),
        }
    }
}

impl std::fmt::Display for UploadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct FreshnessClient {
    http: reqwest::Client,
    endpoint: String,
    field: UploadField,
    verbose: bool,
}

impl FreshnessClient {
    pub fn new(
        endpoint: String,
        field: UploadField,
        timeout_seconds: u64,
        verbose: bool,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FreshscanError::ApiCall(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            field,
            verbose,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one image and parse the returned report.
    pub async fn analyze(&self, image: &ImageInfo) -> Result<FreshnessReport> {
        let bytes = tokio::fs::read(&image.path).await?;

        if self.verbose {
            println!(
                "  → POST {} ({} bytes, field \"{}\")",
                self.endpoint,
                bytes.len(),
                self.field
            );
        }

        let part = multipart::Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(mime_for(&image.file_name))
            .map_err(|e| FreshscanError::ApiCall(format!("invalid content type: {}", e)))?;
        let form = multipart::Form::new().part(self.field.as_str(), part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FreshscanError::ApiCall(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FreshscanError::ApiCall(e.to_string()))?;

        if self.verbose {
            let preview: String = body.chars().take(500).collect();
            println!("  ← {} {}", status, preview);
        }

        if !status.is_success() {
            return Err(FreshscanError::ApiCall(format!(
                "endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        parse_report(&body).map_err(|e| FreshscanError::ApiParse(e.to_string()))
    }

    /// GET the service root and parse the status payload.
    pub async fn ping(&self) -> Result<ServiceStatus> {
        let url = service_root(&self.endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FreshscanError::ApiCall(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FreshscanError::ApiCall(e.to_string()))?;

        if !status.is_success() {
            return Err(FreshscanError::ApiCall(format!(
                "service root returned {}: {}",
                status,
                body.trim()
            )));
        }

        parse_service_status(&body).map_err(|e| FreshscanError::ApiParse(e.to_string()))
    }
}

/// Content type for the multipart part, from the filename extension
fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default();
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

/// Scheme + authority of the endpoint, for the health check
fn service_root(endpoint: &str) -> String {
    let after_scheme = endpoint.find("://").map(|i| i + 3).unwrap_or(0);
    match endpoint[after_scheme..].find('/') {
        Some(i) => endpoint[..after_scheme + i].to_string(),
        None => endpoint.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mime_for_extensions() {
        assert_eq!(mime_for("apple.jpg"), "image/jpeg");
        assert_eq!(mime_for("apple.JPEG"), "image/jpeg");
        assert_eq!(mime_for("apple.png"), "image/png");
        assert_eq!(mime_for("notes.txt"), "application/octet-stream");
        assert_eq!(mime_for("no-extension"), "application/octet-stream");
    }

    #[test]
    fn test_service_root_strips_path() {
        assert_eq!(
            service_root("http://127.0.0.1:8000/analyze-freshness"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            service_root("https://analyzer.example.com/analyze"),
            "https://analyzer.example.com"
        );
        assert_eq!(
            service_root("https://analyzer.example.com"),
            "https://analyzer.example.com"
        );
    }

    #[test]
    fn test_upload_field_from_str() {
        assert_eq!(UploadField::from_str("image").unwrap(), UploadField::Image);
        assert_eq!(UploadField::from_str("FILE").unwrap(), UploadField::File);
        assert!(UploadField::from_str("photo").is_err());
    }

    #[test]
    fn test_upload_field_display_and_serde() {
        assert_eq!(UploadField::Image.to_string(), "image");
        assert_eq!(serde_json::to_string(&UploadField::File).unwrap(), "\"file\"");
        let field: UploadField = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(field, UploadField::Image);
    }
}
