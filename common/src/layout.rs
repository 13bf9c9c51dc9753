//! Shared presentation model
//!
//! `ReportView` projects a `FreshnessReport` into headline, detail rows,
//! and prediction bars. All three frontends render from this projection so
//! the tier rules and number formatting only exist once.

use crate::tier::Tier;
use crate::types::FreshnessReport;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub headline: String,
    pub tier: Tier,
    pub rows: Vec<DetailRow>,
    pub bars: Vec<PredictionBar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// One proportional bar of the predictions map. `width` is the percentage
/// clamped to 0-100 so a malformed value never breaks the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionBar {
    pub label: String,
    pub percent: f64,
    pub width: f64,
    pub tier: Tier,
}

/// Percentage formatting used wherever a confidence value is shown
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// Human-readable byte count for the selected-file line
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

impl ReportView {
    pub fn from_report(report: &FreshnessReport) -> Self {
        match report {
            FreshnessReport::Classification {
                status,
                confidence,
                predictions,
            } => {
                let mut bars: Vec<PredictionBar> = predictions
                    .iter()
                    .map(|(label, percent)| PredictionBar {
                        label: label.clone(),
                        percent: *percent,
                        width: percent.clamp(0.0, 100.0),
                        tier: Tier::from_label(label),
                    })
                    .collect();
                // dominant label first
                bars.sort_by(|a, b| b.percent.total_cmp(&a.percent));

                ReportView {
                    headline: format!("Status: {}", status),
                    tier: Tier::from_label(status),
                    rows: vec![DetailRow {
                        label: "Confidence",
                        value: format!("{}%", format_percent(*confidence)),
                    }],
                    bars,
                }
            }

            FreshnessReport::Scored {
                freshness_score,
                status,
                spots_detected,
                brightness,
            } => {
                let mut rows = vec![
                    DetailRow {
                        label: "Status",
                        value: status.clone(),
                    },
                    DetailRow {
                        label: "Spots Detected",
                        value: spots_detected.to_string(),
                    },
                ];
                if let Some(brightness) = brightness {
                    rows.push(DetailRow {
                        label: "Brightness",
                        value: format_number(*brightness),
                    });
                }

                ReportView {
                    headline: format!("Freshness Score: {}/100", format_number(*freshness_score)),
                    tier: report.tier(),
                    rows,
                    bars: Vec::new(),
                }
            }

            FreshnessReport::Legacy {
                freshness,
                spots,
                brightness,
                status,
            } => {
                let mut rows = Vec::new();
                if let Some(status) = status {
                    rows.push(DetailRow {
                        label: "Status",
                        value: status.clone(),
                    });
                }
                rows.push(DetailRow {
                    label: "Spots Detected",
                    value: spots.to_string(),
                });
                rows.push(DetailRow {
                    label: "Brightness",
                    value: format_number(*brightness),
                });

                ReportView {
                    headline: format!("Freshness Score: {}/100", format_number(*freshness)),
                    tier: report.tier(),
                    rows,
                    bars: Vec::new(),
                }
            }
        }
    }
}
