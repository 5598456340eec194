use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, sync::sync},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and non-fatal error count
/// - `Err` if the command fails (e.g., output file missing, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => {
            let root = resolve_root(cmd.args.common.root.clone())?;
            sync(cmd, &root)
        }
        Some(Command::Init) => init(&resolve_root(None)?),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => env::current_dir().context("Failed to determine current directory"),
    }
}
