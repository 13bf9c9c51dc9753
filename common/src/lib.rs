//! Freshscan Common Library
//!
//! Types and utilities shared by the CLI, desktop, and web frontends

pub mod error;
pub mod layout;
pub mod parser;
pub mod state;
pub mod tier;
pub mod types;

pub use error::{Error, Result};
pub use layout::{DetailRow, PredictionBar, ReportView};
pub use parser::{parse_report, parse_service_status};
pub use state::{AnalyzerState, SelectedFile};
pub use tier::Tier;
pub use types::{
    FreshnessReport, SavedReport, ServiceStatus, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS,
    DEFAULT_UPLOAD_FIELD,
};
