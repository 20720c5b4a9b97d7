use std::fmt::Write;

use crate::error::Result;
use crate::stats::SlimStats;

use super::{RunSummary, SummaryFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MiB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{bytes} B")
    }
}

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, stats: &SlimStats) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Slimmed {} of {} documents",
            summary.documents_processed, summary.documents_found
        );
        let _ = writeln!(out, "  Input:     {}", format_bytes(summary.input_bytes));
        let _ = writeln!(out, "  Output:    {}", format_bytes(summary.output_bytes));
        let _ = writeln!(out, "  Reduction: {:.1}%", summary.reduction_percent());

        let entries = stats.sorted();
        if entries.is_empty() {
            let _ = writeln!(out, "\nNothing removed.");
        } else {
            let _ = writeln!(out, "\nRemoved {} entries:", stats.total_removed());
            let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            for (key, count) in entries {
                let _ = writeln!(out, "  {key:<width$}  {count}");
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
