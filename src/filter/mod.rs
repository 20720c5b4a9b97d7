mod classify;
mod state;

pub use classify::{LineClassifier, LineDecision};
pub use state::{ScanState, brace_delta};

use crate::rules::RuleSet;
use crate::stats::SlimStats;

/// Per-document accounting from one filter pass.
///
/// `kept + dropped + skipped` always equals `total`: every input line is
/// either emitted, removed by a rule match, or consumed as skipped block body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
    pub skipped: usize,
}

/// Single-pass line filter for one document.
pub struct FileFilter<'a> {
    classifier: LineClassifier<'a>,
}

impl<'a> FileFilter<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self {
            classifier: LineClassifier::new(rules),
        }
    }

    /// Walk the document's lines once, appending kept lines to `out` and
    /// counting removals in `stats` under the matching rule's name.
    ///
    /// Skipped block bodies produce no output and no per-line stats; only the
    /// block entry event is counted. If braces never rebalance, the remainder
    /// of the document stays suppressed.
    pub fn filter(&self, source: &str, out: &mut Vec<String>, stats: &mut SlimStats) -> FilterOutcome {
        let mut scan = ScanState::new();
        let mut outcome = FilterOutcome::default();

        for line in source.lines() {
            outcome.total += 1;

            if scan.inside_skipped_block() {
                outcome.skipped += 1;
                scan.advance(brace_delta(line));
                continue;
            }

            match self.classifier.classify(line) {
                LineDecision::Keep(kept) => {
                    outcome.kept += 1;
                    out.push(kept);
                }
                LineDecision::DropSingle(rule) => {
                    outcome.dropped += 1;
                    stats.record(rule);
                }
                LineDecision::EnterBlock { rule, delta } => {
                    outcome.dropped += 1;
                    stats.record(rule);
                    scan.enter_block(delta);
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
