//! Upload/analysis state machine
//!
//! The three pieces of state every frontend owns: the selected file, the
//! last report, and the in-flight flag. Rendering is a pure function of
//! this struct; the frontends only differ in how they draw it.

use crate::error::{Error, Result};
use crate::types::FreshnessReport;

/// Metadata of the user-chosen image. The payload itself (a path on
/// native, a data URL in the browser) stays with the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    pub selected: Option<SelectedFile>,
    pub report: Option<FreshnessReport>,
    pub in_flight: bool,
}

impl AnalyzerState {
    /// Replace the selection wholesale. The last report stays visible
    /// until the next successful analysis. Picking is allowed even while
    /// a request is in flight.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    /// Enter the pending state. Fails without side effects when nothing
    /// is selected (no request may be issued then) or when a request is
    /// already running.
    pub fn begin(&mut self) -> Result<()> {
        if self.selected.is_none() {
            return Err(Error::NoFileSelected);
        }
        if self.in_flight {
            return Err(Error::AnalysisPending);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Successful resolution: the new report replaces any prior one.
    pub fn complete(&mut self, report: FreshnessReport) {
        self.report = Some(report);
        self.in_flight = false;
    }

    /// Failed resolution: the prior report, if any, is left in place.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }

    pub fn can_trigger(&self) -> bool {
        !self.in_flight
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.in_flight {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }
}
