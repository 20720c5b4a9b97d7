/// Collapse filtered output into its final textual form.
///
/// Strips trailing whitespace per line, removes every blank or
/// whitespace-only line, trims the whole text, and appends exactly one
/// trailing newline. A fully blank input collapses to the empty string.
/// Blank-line removal is deliberately lossy, including blanks inside
/// preserved comment runs. Idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed.trim_start().is_empty() {
            continue;
        }
        out.push_str(trimmed);
        out.push('\n');
    }

    let trimmed = out.trim();
    if trimmed.is_empty() {
        // Nothing survived filtering; an empty text has no lines to terminate.
        return String::new();
    }

    let mut normalized = trimmed.to_string();
    normalized.push('\n');
    normalized
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
