use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `.tmdl-slim.toml`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Metadata group toggles `[strip]`.
    #[serde(default)]
    pub strip: StripConfig,
}

/// One toggle per metadata group. A `true` toggle enables that group's
/// removal rules (and, for `language_data`, the cultures subtree exclusion).
/// All groups are stripped by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StripConfig {
    /// Strip `annotation` entries and `extendedProperties` blocks.
    #[serde(default = "default_true")]
    pub annotations: bool,

    /// Strip `lineageTag` / `sourceLineageTag` properties.
    #[serde(default = "default_true")]
    pub lineage: bool,

    /// Strip `linguisticMetadata` blocks and skip the `cultures` subtree.
    #[serde(default = "default_true")]
    pub language_data: bool,

    /// Strip column source metadata (`summarizeBy`, `sourceProviderType`, ...).
    #[serde(default = "default_true")]
    pub column_metadata: bool,

    /// Strip engine-inferred properties (`isNameInferred`, `variation` blocks, ...).
    #[serde(default = "default_true")]
    pub inferred: bool,

    /// Strip display-only properties (`isHidden`, `displayFolder`, ...).
    #[serde(default = "default_true")]
    pub display: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            annotations: true,
            lineage: true,
            language_data: true,
            column_metadata: true,
            inferred: true,
            display: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
