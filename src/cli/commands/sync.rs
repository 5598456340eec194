use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::SyncCommand;
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::{
    config::{ConfigOverrides, default_sources, load_config},
    core::{Synchronizer, load_input_file, read_output_file, scan_sources},
};

pub fn sync(cmd: SyncCommand, root: &Path) -> Result<CommandResult> {
    let args = cmd.args;

    let config = load_config(root)?
        .config
        .apply_overrides(ConfigOverrides {
            output_file_name: args.output,
            no_deactivate_tokens: args.no_deactivate,
            sources: args.sources,
        });
    config.validate()?;

    // A project may lack some of the default sources; only warn about
    // paths somebody asked for.
    let report_missing = config.sources != default_sources();
    let scan = scan_sources(root, &config.sources, &config.ignores, report_missing)?;
    let files = scan
        .paths
        .iter()
        .map(|path| load_input_file(root, path))
        .collect::<Result<Vec<_>>>()?;

    let output_path = root.join(&config.output.file_name);
    let synchronizer = Synchronizer::new(config)?;

    let mut existing: Option<String> = None;
    let outcome = synchronizer.run_with(&files, || {
        let content = read_output_file(&output_path)?;
        existing = Some(content.clone());
        Ok(content)
    })?;

    let needs_write = match (&outcome.output, &existing) {
        (Some(output), Some(existing)) => output.contents != *existing,
        (Some(_), None) => true,
        (None, _) => false,
    };

    if args.apply
        && needs_write
        && let Some(output) = &outcome.output
    {
        fs::write(&output_path, &output.contents)
            .with_context(|| format!("Failed to write output file: {:?}", output_path))?;
    }

    let error_count = outcome.errors.len();

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            output_path: synchronizer.config().output.file_name.clone(),
            is_apply: args.apply,
            has_output: outcome.output.is_some(),
            needs_write,
            changes: outcome.changes,
            scanned_files: scan.paths,
            skipped: outcome.skipped,
            scan_warnings: scan.warnings,
            input_errors: outcome.errors,
            files_processed: outcome.files_processed,
            tokens_found: outcome.tokens_found,
        }),
        error_count,
    })
}
