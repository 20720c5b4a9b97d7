mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::Serialize;

use crate::error::Result;
use crate::stats::SlimStats;

/// Run-level figures for the end-of-run report.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    pub documents_found: usize,
    pub documents_processed: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl RunSummary {
    /// Size reduction as a percentage of the input, 0 for empty input.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        let input = self.input_bytes as f64;
        let output = self.output_bytes as f64;
        (1.0 - output / input) * 100.0
    }
}

/// Trait for rendering the run summary and removal stats.
pub trait SummaryFormatter {
    /// Format the summary into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &RunSummary, stats: &SlimStats) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
