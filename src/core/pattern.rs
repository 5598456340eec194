//! Pattern resolution: which regex extracts tokens from which file.

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Associates a set of file extensions with a token pattern.
///
/// The pattern must have a capturing group; group 1 is the token name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDefinition {
    pub file_extensions: Vec<String>,
    pub pattern: String,
}

impl PatternDefinition {
    pub fn new(file_extensions: &[&str], pattern: &str) -> Self {
        Self {
            file_extensions: file_extensions.iter().map(|e| e.to_string()).collect(),
            pattern: pattern.to_string(),
        }
    }

    /// Suffix match on the raw path string. No dot handling, so `html`
    /// also matches `page.xhtml`.
    pub fn matches(&self, path: &str) -> bool {
        self.file_extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

/// The built-in pattern table.
pub fn default_patterns() -> Vec<PatternDefinition> {
    vec![
        PatternDefinition::new(&["xml", "html"], r"\{i18n>([^}]+)\}"),
        PatternDefinition::new(&["json"], r"\{\{([^}]+)\}\}"),
        PatternDefinition::new(&["js"], r#"getText\(["']([^"']+)["']"#),
    ]
}

/// Compile a token pattern the way it is applied to file contents:
/// globally, with `^`/`$` matching at line boundaries.
pub fn compile_token_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(&format!("(?m){}", pattern))
        .with_context(|| format!("Invalid token pattern: \"{}\"", pattern))?;
    if regex.captures_len() < 2 {
        bail!(
            "Token pattern \"{}\" must have a capturing group for the token name",
            pattern
        );
    }
    Ok(regex)
}

struct CompiledPattern {
    definition: PatternDefinition,
    regex: Regex,
}

/// Resolves a file path to the compiled pattern of the first matching definition.
pub struct PatternResolver {
    patterns: Vec<CompiledPattern>,
}

impl PatternResolver {
    pub fn new(definitions: &[PatternDefinition]) -> Result<Self> {
        let patterns = definitions
            .iter()
            .map(|definition| {
                Ok(CompiledPattern {
                    regex: compile_token_pattern(&definition.pattern)?,
                    definition: definition.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// First definition wins. `None` means the file should be skipped.
    pub fn resolve(&self, path: &str) -> Option<&Regex> {
        self.patterns
            .iter()
            .find(|p| p.definition.matches(path))
            .map(|p| &p.regex)
    }
}
