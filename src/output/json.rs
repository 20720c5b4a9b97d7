use serde_json::json;

use crate::error::Result;
use crate::stats::SlimStats;

use super::{RunSummary, SummaryFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary, stats: &SlimStats) -> Result<String> {
        let mut removed = serde_json::Map::new();
        for (key, count) in stats.sorted() {
            removed.insert(key.to_string(), json!(count));
        }

        let report = json!({
            "documents_found": summary.documents_found,
            "documents_processed": summary.documents_processed,
            "input_bytes": summary.input_bytes,
            "output_bytes": summary.output_bytes,
            "reduction_percent": summary.reduction_percent(),
            "total_removed": stats.total_removed(),
            "removed": removed,
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
