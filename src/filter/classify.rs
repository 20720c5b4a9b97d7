use crate::rules::{RuleKind, RuleSet};

use super::state::brace_delta;

/// Decision for a single line outside any skipped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDecision {
    /// Keep the line, with trailing whitespace stripped. Leading indentation
    /// and comments pass through verbatim.
    Keep(String),
    /// Drop just this line, counted under the rule name.
    DropSingle(&'static str),
    /// Drop this line and enter block skipping with the line's net brace delta.
    EnterBlock { rule: &'static str, delta: i32 },
}

/// Applies the rule set to one line, first match wins.
pub struct LineClassifier<'a> {
    rules: &'a RuleSet,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn classify(&self, line: &str) -> LineDecision {
        match self.rules.first_match(line) {
            Some(rule) => match rule.kind() {
                RuleKind::BlockStarter => LineDecision::EnterBlock {
                    rule: rule.name(),
                    delta: brace_delta(line),
                },
                RuleKind::SimpleRemoval => LineDecision::DropSingle(rule.name()),
            },
            None => LineDecision::Keep(line.trim_end().to_string()),
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
