use anyhow::{Context, Result};
use freshscan_common::{parse_report, FreshnessReport, SavedReport, DEFAULT_TIMEOUT_SECONDS};
use std::path::Path;
use std::time::Duration;

pub fn analyze_blocking(endpoint: &str, field: &str, path: &Path) -> Result<FreshnessReport> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
        .build()
        .context("build HTTP client")?;

    let form = reqwest::blocking::multipart::Form::new()
        .file(field.to_string(), path)
        .with_context(|| format!("read {}", path.display()))?;

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .with_context(|| format!("POST {}", endpoint))?;

    let status = response.status();
    let body = response.text().context("read response body")?;
    if !status.is_success() {
        anyhow::bail!("endpoint returned {}: {}", status, body.trim());
    }

    let report = parse_report(&body)?;
    Ok(report)
}

pub fn save_report(path: &Path, report: &SavedReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn default_report_name(file_name: &str) -> String {
    let stem = file_name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file_name);
    if stem.is_empty() {
        "freshness-report.json".to_string()
    } else {
        format!("{stem}.report.json")
    }
}
