//! Token extraction and reconciliation engine.
//!
//! Pipeline, leaf to root:
//!
//! 1. `pattern`: resolve a file path to its token regex
//! 2. `extract`: fold input files into one token sequence
//! 3. `classify`: parse the existing output file into line records
//! 4. `reconcile`: add, deactivate and reactivate entries
//! 5. `serialize`: render the merged lines
//!
//! `sync` wires the steps together and `scan` feeds it from the file system.

pub mod classify;
pub mod extract;
mod humanize;
pub mod pattern;
pub mod reconcile;
pub mod scan;
mod serialize;
pub mod sync;

pub use classify::{Entry, LineKind, LineRecord, LineState, classify, classify_line};
pub use extract::{
    FileContents, InputError, InputFile, SkipReason, TokenAccumulator, collect_tokens,
    extract_tokens,
};
pub use humanize::token_to_message;
pub use pattern::{PatternDefinition, PatternResolver, compile_token_pattern, default_patterns};
pub use reconcile::{Change, ChangeKind, Reconciliation, reconcile};
pub use scan::{ScanResult, ScanWarning, load_input_file, scan_sources};
pub use serialize::serialize;
pub use sync::{OutputFile, SyncOutcome, Synchronizer, read_output_file};
