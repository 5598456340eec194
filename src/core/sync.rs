//! The synchronization pipeline: input files in, at most one output file out.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;

use super::{
    classify::classify,
    extract::{InputError, InputFile, SkipReason, TokenAccumulator, collect_tokens},
    pattern::PatternResolver,
    reconcile::{Change, reconcile},
    serialize::serialize,
};
use crate::config::Config;

/// The synchronized output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub contents: String,
}

/// Everything a synchronization run produced.
#[derive(Debug, Default)]
pub struct SyncOutcome {
    /// `None` when no input file was processed.
    pub output: Option<OutputFile>,
    pub changes: Vec<Change>,
    /// Per-file errors that did not abort the run.
    pub errors: Vec<InputError>,
    pub skipped: Vec<(String, SkipReason)>,
    pub files_processed: usize,
    pub tokens_found: usize,
}

/// Immutable, compiled view of a [`Config`].
pub struct Synchronizer {
    config: Config,
    resolver: PatternResolver,
    line_format: Regex,
}

impl Synchronizer {
    pub fn new(config: Config) -> Result<Self> {
        let resolver = PatternResolver::new(&config.patterns)?;
        let line_format = config.output_line_format()?;
        Ok(Self {
            config,
            resolver,
            line_format,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run over `files`, reading the output file from its configured path.
    pub fn run<'a, I>(&self, files: I) -> Result<SyncOutcome>
    where
        I: IntoIterator<Item = &'a InputFile>,
    {
        let output_path = self.config.output.file_name.clone();
        self.run_with(files, || read_output_file(Path::new(&output_path)))
    }

    /// Like [`Synchronizer::run`] but the existing output is supplied by
    /// `read_output`. It is only called if at least one file was processed.
    pub fn run_with<'a, I, F>(&self, files: I, read_output: F) -> Result<SyncOutcome>
    where
        I: IntoIterator<Item = &'a InputFile>,
        F: FnOnce() -> Result<String>,
    {
        let TokenAccumulator {
            tokens,
            files_processed,
            skipped,
            errors,
        } = collect_tokens(files, &self.resolver);

        let mut outcome = SyncOutcome {
            errors,
            skipped,
            files_processed,
            tokens_found: tokens.len(),
            ..Default::default()
        };

        // no files passed in, no file goes out
        if files_processed == 0 {
            return Ok(outcome);
        }

        let existing = read_output()?;
        let records = classify(&existing, &self.line_format);
        let merged = reconcile(&tokens, &records, &self.config.no_deactivate_tokens);

        outcome.output = Some(OutputFile {
            path: self.config.output.file_name.clone(),
            contents: serialize(&merged.lines),
        });
        outcome.changes = merged.changes;
        Ok(outcome)
    }
}

/// Read the existing output file. It must already exist.
pub fn read_output_file(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read output file: {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
