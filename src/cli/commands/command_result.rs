use std::path::PathBuf;

use crate::core::{Change, ChangeKind, InputError, ScanWarning, SkipReason};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct SyncSummary {
    /// Output file as configured (relative to the project root).
    pub output_path: String,
    pub is_apply: bool,
    /// False when no source file was processed and nothing was produced.
    pub has_output: bool,
    /// Serialized output differs from what is on disk.
    pub needs_write: bool,
    pub changes: Vec<Change>,
    pub scanned_files: Vec<PathBuf>,
    pub skipped: Vec<(String, SkipReason)>,
    pub scan_warnings: Vec<ScanWarning>,
    pub input_errors: Vec<InputError>,
    pub files_processed: usize,
    pub tokens_found: usize,
}

impl SyncSummary {
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running i18nsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Non-fatal errors raised while processing input files.
    pub error_count: usize,
}
