use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{PatternDefinition, compile_token_pattern, default_patterns};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "webapp/i18n/i18n.properties";

/// Line format of the output file: comment marker, key, value.
pub const DEFAULT_OUTPUT_PATTERN: &str = "^(#*)([^= ]+) *= *(.*)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default = "default_output_file_name")]
    pub file_name: String,
    #[serde(default = "default_output_pattern")]
    pub pattern: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_output_file_name(),
            pattern: default_output_pattern(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternDefinition>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub no_deactivate_tokens: Vec<String>,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}

fn default_output_pattern() -> String {
    DEFAULT_OUTPUT_PATTERN.to_string()
}

/// Sources scanned when neither the config file nor the command line name any.
pub fn default_sources() -> Vec<String> {
    [
        "webapp/model/*.js",
        "webapp/controller/*.js",
        "webapp/manifest.json",
        "webapp/view/*.xml",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            output: OutputConfig::default(),
            no_deactivate_tokens: Vec::new(),
            sources: default_sources(),
            ignores: Vec::new(),
        }
    }
}

/// What a config file may contain: either just the output file name, or
/// an object whose fields override the defaults.
///
/// Serde defaults on [`Config`] and [`OutputConfig`] give the merge rules:
/// lists replace the defaults wholesale while `output` is merged field by
/// field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConfigSource {
    FileName(String),
    Options(Config),
}

impl From<ConfigSource> for Config {
    fn from(source: ConfigSource) -> Self {
        match source {
            ConfigSource::FileName(file_name) => Config {
                output: OutputConfig {
                    file_name,
                    ..Default::default()
                },
                ..Default::default()
            },
            ConfigSource::Options(config) => config,
        }
    }
}

/// Overrides coming from the command line. Unset fields keep the
/// configured value.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub output_file_name: Option<String>,
    pub no_deactivate_tokens: Vec<String>,
    pub sources: Vec<String>,
}

impl Config {
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(file_name) = overrides.output_file_name {
            self.output.file_name = file_name;
        }
        if !overrides.no_deactivate_tokens.is_empty() {
            self.no_deactivate_tokens = overrides.no_deactivate_tokens;
        }
        if !overrides.sources.is_empty() {
            self.sources = overrides.sources;
        }
        self
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any regex or glob pattern is invalid.
    pub fn validate(&self) -> Result<()> {
        for definition in &self.patterns {
            compile_token_pattern(&definition.pattern)
                .with_context(|| "Invalid pattern in 'patterns'")?;
        }

        self.output_line_format()?;

        for pattern in &self.sources {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", pattern))?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Compile `output.pattern`, which needs three capture groups.
    pub fn output_line_format(&self) -> Result<Regex> {
        let pattern = &self.output.pattern;
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid regex in 'output.pattern': \"{}\"", pattern))?;
        if regex.captures_len() < 4 {
            bail!(
                "'output.pattern' must have three capture groups (marker, key, value): \"{}\"",
                pattern
            );
        }
        Ok(regex)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn parse_config(content: &str) -> Result<Config> {
    let source: ConfigSource = serde_json::from_str(content)?;
    Ok(source.into())
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config = parse_config(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
