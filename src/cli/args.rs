//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Merge tokens found in source files into the properties file
//! - `init`: Initialize i18nsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; sources, output and config are resolved from here
    #[arg(long, env = "I18NSYNC_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source files, directories or globs to scan (overrides config file)
    pub sources: Vec<String>,

    /// Properties file to synchronize (overrides config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Tokens that are never commented out (overrides config file)
    /// Can be specified multiple times: --no-deactivate appTitle --no-deactivate appDescription
    #[arg(long = "no-deactivate", value_name = "TOKEN")]
    pub no_deactivate: Vec<String>,

    /// Actually write the output file (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Append new tokens, comment out unused ones and restore reused ones
    Sync(SyncCommand),
    /// Initialize a new .i18nsyncrc.json configuration file
    Init,
}
