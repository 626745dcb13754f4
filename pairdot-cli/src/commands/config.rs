//! Config command implementation - print or save the example or effective configuration

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::{CliError, CliResult};

pub fn execute(config: &Config, example: bool, save: Option<&Path>) -> CliResult<()> {
    let selected = if example { Config::default() } else { config.clone() };

    if let Some(path) = save {
        selected
            .save_to_file(path)
            .map_err(|e| CliError::config(format!("{:#}", e)))?;
        log::info!("Configuration written to: {}", path.display());
        return Ok(());
    }

    let content = if example {
        Config::example_toml().map_err(|e| CliError::config(format!("{:#}", e)))?
    } else {
        toml::to_string_pretty(&selected)?
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", content)?;
    Ok(())
}
