use indexmap::IndexMap;

/// Removal counters keyed by rule name (plus synthetic keys such as the
/// cultures-folder skip). Counts only ever increase during a run.
#[derive(Debug, Clone, Default)]
pub struct SlimStats {
    counts: IndexMap<String, u64>,
}

impl SlimStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of every counter, synthetic keys included.
    #[must_use]
    pub fn total_removed(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries sorted lexicographically by key, for the summary report.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
