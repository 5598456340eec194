use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(root: &Path) -> Result<CommandResult> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path: config_path }),
        error_count: 0,
    })
}
