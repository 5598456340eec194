//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow i18nsync to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, SyncSummary};
use crate::core::{Change, ChangeKind, InputError, ScanWarning, SkipReason};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of a command to stdout, errors and warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync_to(summary, verbose, &mut out, &mut err),
        CommandSummary::Init(summary) => print_init_to(summary, &mut out),
    }
}

/// Print a sync summary to custom writers.
pub fn print_sync_to<O: Write, E: Write>(
    summary: &SyncSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for warning in &summary.scan_warnings {
        print_scan_warning(warning, err);
    }
    for error in &summary.input_errors {
        print_input_error(error, err);
    }

    if verbose {
        for path in &summary.scanned_files {
            let _ = writeln!(out, "{} {}", "scanning".dimmed(), path.display());
        }
        for (path, reason) in &summary.skipped {
            let reason = match reason {
                SkipReason::NoContent => "no content",
                SkipReason::NoPattern => "no matching pattern",
            };
            let _ = writeln!(
                out,
                "{} {} {}",
                "skipped".dimmed(),
                path,
                format!("({})", reason).dimmed()
            );
        }
    }

    for change in &summary.changes {
        print_change(change, out);
    }

    print_sync_summary(summary, out);
}

/// Print an init summary to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_change<W: Write>(change: &Change, writer: &mut W) {
    let label = match change.kind {
        ChangeKind::Append => change.kind.label().green(),
        ChangeKind::Deactivate => change.kind.label().yellow(),
        ChangeKind::Activate => change.kind.label().blue(),
    };
    let _ = writeln!(writer, "{} token {}", label, change.token.cyan());
}

fn print_scan_warning<W: Write>(warning: &ScanWarning, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}: {}",
        "warning:".bold().yellow(),
        warning.path,
        warning.error
    );
}

fn print_input_error<W: Write>(error: &InputError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}: {}",
        "error:".bold().red(),
        error.file_path,
        error.message
    );
}

fn print_sync_summary<W: Write>(summary: &SyncSummary, writer: &mut W) {
    if !summary.has_output {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No source files processed - {} left untouched",
                summary.output_path
            )
            .green()
        );
        return;
    }

    let scanned = format!(
        "{} token{} in {} file{}",
        summary.tokens_found,
        plural(summary.tokens_found),
        summary.files_processed,
        plural(summary.files_processed)
    );

    if !summary.needs_write {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date ({})", summary.output_path, scanned).green()
        );
        return;
    }

    let counts = format!(
        "{} appended, {} deactivated, {} activated",
        summary.count(ChangeKind::Append),
        summary.count(ChangeKind::Deactivate),
        summary.count(ChangeKind::Activate)
    );

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Updated {}: {} ({})", summary.output_path, counts, scanned).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Would update {}: {} ({})",
            FAILURE_MARK.yellow(),
            summary.output_path,
            counts,
            scanned
        );
        let _ = writeln!(
            writer,
            "Run with {} to write the changes.",
            "--apply".cyan()
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
