//! Terminal rendering and report persistence

use crate::error::Result;
use crate::scanner::ImageInfo;
use freshscan_common::layout::{format_percent, format_size};
use freshscan_common::{FreshnessReport, ReportView, SavedReport};
use std::path::Path;

const BAR_WIDTH: usize = 24;

/// Print one report, indented under its file line.
pub fn print_report(report: &FreshnessReport) {
    let view = ReportView::from_report(report);

    println!("  {} {}", view.tier.marker(), view.headline);
    for row in &view.rows {
        println!("    {}: {}", row.label, row.value);
    }
    for bar in &view.bars {
        println!(
            "    {} {:<16} {} {:>6}%",
            bar.tier.marker(),
            bar.label,
            bar_string(bar.width),
            format_percent(bar.percent)
        );
    }
}

/// The file line shown before each upload.
pub fn print_file_line(image: &ImageInfo) {
    let mut details = Vec::new();
    if let Ok((width, height)) = image::image_dimensions(&image.path) {
        details.push(format!("{}x{}", width, height));
    }
    if let Some(size) = image.size {
        details.push(format_size(size));
    }
    if let Some(date) = &image.date {
        details.push(format!("captured {}", date));
    }

    if details.is_empty() {
        println!("• {}", image.file_name);
    } else {
        println!("• {} ({})", image.file_name, details.join(", "));
    }
}

pub fn saved_report(image: &ImageInfo, report: &FreshnessReport) -> SavedReport {
    SavedReport {
        file_name: image.file_name.clone(),
        file_path: image.path.display().to_string(),
        captured_at: image.date.clone().unwrap_or_default(),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        report: report.clone(),
    }
}

pub fn write_reports(path: &Path, reports: &[SavedReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn bar_string(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_image(dir: &Path) -> ImageInfo {
        ImageInfo {
            path: dir.join("apple.jpg"),
            file_name: "apple.jpg".to_string(),
            date: Some("2026-08-01 09:30:00".to_string()),
            size: Some(2048),
        }
    }

    fn sample_report() -> FreshnessReport {
        FreshnessReport::Scored {
            freshness_score: 80.0,
            status: "Fresh".to_string(),
            spots_detected: 0,
            brightness: None,
        }
    }

    #[test]
    fn test_bar_string_proportions() {
        assert_eq!(bar_string(0.0), "░".repeat(24));
        assert_eq!(bar_string(100.0), "█".repeat(24));

        let half = bar_string(50.0);
        assert_eq!(half.chars().filter(|&c| c == '█').count(), 12);
        assert_eq!(half.chars().count(), 24);
    }

    #[test]
    fn test_saved_report_carries_image_metadata() {
        let image = ImageInfo {
            path: PathBuf::from("/photos/apple.jpg"),
            file_name: "apple.jpg".to_string(),
            date: Some("2026-08-01 09:30:00".to_string()),
            size: Some(2048),
        };
        let saved = saved_report(&image, &sample_report());

        assert_eq!(saved.file_name, "apple.jpg");
        assert_eq!(saved.file_path, "/photos/apple.jpg");
        assert_eq!(saved.captured_at, "2026-08-01 09:30:00");
        assert!(!saved.analyzed_at.is_empty());
        assert_eq!(saved.report, sample_report());
    }

    #[test]
    fn test_write_reports_produces_parseable_json() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("result.json");
        let reports = vec![saved_report(&sample_image(temp.path()), &sample_report())];

        write_reports(&out, &reports).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let parsed: Vec<SavedReport> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].file_name, "apple.jpg");
    }
}
