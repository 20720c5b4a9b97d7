/// Net count of `{` minus `}` on a single line.
#[must_use]
pub fn brace_delta(line: &str) -> i32 {
    let mut delta = 0i32;
    for byte in line.bytes() {
        match byte {
            b'{' => delta += 1,
            b'}' => delta -= 1,
            _ => {}
        }
    }
    delta
}

/// Per-document scan state for suppressed brace-delimited regions.
///
/// Depth may go negative transiently on a closing brace with no matching open;
/// exiting the skipped state is defined as reaching depth <= 0 after an update,
/// at which point depth is clamped back to 0. Unbalanced input therefore stops
/// skipping instead of failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    inside_skipped_block: bool,
    brace_depth: i32,
}

impl ScanState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inside_skipped_block: false,
            brace_depth: 0,
        }
    }

    #[must_use]
    pub const fn inside_skipped_block(&self) -> bool {
        self.inside_skipped_block
    }

    #[must_use]
    pub const fn brace_depth(&self) -> i32 {
        self.brace_depth
    }

    /// React to a block-starter line with the given net brace delta.
    ///
    /// Returns `true` if a multi-line block was entered. A starter whose braces
    /// balance on its own line (`extendedProperties = {}`) never enters the
    /// skipped state; it is a plain single-line removal.
    pub const fn enter_block(&mut self, delta: i32) -> bool {
        if delta > 0 {
            self.inside_skipped_block = true;
            self.brace_depth = delta;
            true
        } else {
            false
        }
    }

    /// Consume one line inside a skipped block.
    ///
    /// Returns `true` when this line closes the block; the closing line itself
    /// is still part of the suppressed region.
    pub const fn advance(&mut self, delta: i32) -> bool {
        self.brace_depth += delta;
        if self.brace_depth <= 0 {
            self.inside_skipped_block = false;
            self.brace_depth = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
