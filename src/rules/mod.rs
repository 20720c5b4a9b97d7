use regex::Regex;

use crate::config::StripConfig;
use crate::error::{Result, TmdlSlimError};

/// Synthetic stats key for whole-document skips of the `cultures` subtree.
/// Distinct from every per-line rule name.
pub const CULTURES_FOLDER_KEY: &str = "cultures-folder";

/// How a matched line is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Only the matched line is dropped.
    SimpleRemoval,
    /// The matched line introduces a brace-delimited block; the whole block
    /// is suppressed.
    BlockStarter,
}

/// A single removal rule: a named line pattern plus its removal kind.
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    kind: RuleKind,
    matcher: Regex,
}

impl Rule {
    /// Property assignment, regardless of value: `^\s*<name>\s*(=|:)`.
    fn key_value(name: &'static str, kind: RuleKind) -> Result<Self> {
        Self::compile(name, kind, &format!(r"^\s*{name}\s*(=|:)"))
    }

    /// Boolean property: bare name, or explicit `= true` / `: false`, with an
    /// optional trailing semicolon. Anchored to end-of-line so the name never
    /// matches as a prefix of a longer identifier.
    fn boolean(name: &'static str) -> Result<Self> {
        Self::compile(
            name,
            RuleKind::SimpleRemoval,
            &format!(r"^\s*{name}(\s*(=|:)\s*(true|false))?\s*;?\s*$"),
        )
    }

    /// Bare construct with no value syntax: `^\s*<name>\b`.
    fn bare_prefix(name: &'static str, kind: RuleKind) -> Result<Self> {
        Self::compile(name, kind, &format!(r"^\s*{name}\b"))
    }

    fn compile(name: &'static str, kind: RuleKind, pattern: &str) -> Result<Self> {
        let matcher = Regex::new(pattern).map_err(|source| TmdlSlimError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            name,
            kind,
            matcher,
        })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.matcher.is_match(line)
    }
}

/// Ordered removal rules; the first matching rule wins.
///
/// Built once from the group toggles at startup and immutable afterwards.
/// Never matched by any rule: `isActive`, `isKey`, `isUnique` and comments —
/// those are the signal the slimming exists to retain.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the ordered rule list for the enabled groups.
    ///
    /// # Errors
    /// Returns an error if a rule pattern fails to compile.
    pub fn from_config(strip: &StripConfig) -> Result<Self> {
        let mut rules = Vec::new();

        if strip.annotations {
            rules.push(Rule::bare_prefix("annotation", RuleKind::BlockStarter)?);
            rules.push(Rule::key_value("extendedProperties", RuleKind::BlockStarter)?);
        }
        if strip.lineage {
            rules.push(Rule::key_value("lineageTag", RuleKind::SimpleRemoval)?);
            rules.push(Rule::key_value("sourceLineageTag", RuleKind::SimpleRemoval)?);
        }
        if strip.language_data {
            rules.push(Rule::key_value("linguisticMetadata", RuleKind::BlockStarter)?);
        }
        if strip.column_metadata {
            rules.push(Rule::key_value("summarizeBy", RuleKind::SimpleRemoval)?);
            rules.push(Rule::key_value("sourceProviderType", RuleKind::SimpleRemoval)?);
            rules.push(Rule::key_value("encodingHint", RuleKind::SimpleRemoval)?);
        }
        if strip.inferred {
            rules.push(Rule::boolean("isNameInferred")?);
            rules.push(Rule::boolean("isDataTypeInferred")?);
            rules.push(Rule::key_value("changedProperty", RuleKind::SimpleRemoval)?);
            rules.push(Rule::bare_prefix("variation", RuleKind::BlockStarter)?);
        }
        if strip.display {
            rules.push(Rule::boolean("isHidden")?);
            rules.push(Rule::key_value("displayFolder", RuleKind::SimpleRemoval)?);
            rules.push(Rule::boolean("isAvailableInMdx")?);
        }

        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching the line, in insertion order.
    #[must_use]
    pub fn first_match(&self, line: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(line))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
