//! Command implementations and the shared context they run with.

pub mod censor;
pub mod check;
pub mod classify;
pub mod rules;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use log::debug;
use rulesmith_core::default_settings_path;

use crate::cli::{Cli, Commands};
use crate::ui::output_format;
use crate::ui::theme::{default_theme_map, ThemeMap};

/// Exit code for a rejected save or a forbidden classification.
pub const EXIT_VALIDATION_FAILED: u8 = 2;

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    pub settings_path: PathBuf,
    pub theme: ThemeMap,
    pub stdout_colors: bool,
    pub stderr_colors: bool,
}

impl CommandContext {
    pub fn new(settings: Option<PathBuf>) -> Result<Self> {
        let settings_path = match settings {
            Some(path) => path,
            None => default_settings_path()?,
        };
        debug!("Using settings file {}", settings_path.display());
        Ok(Self {
            settings_path,
            theme: default_theme_map(),
            stdout_colors: io::stdout().is_terminal(),
            stderr_colors: io::stderr().is_terminal(),
        })
    }

    pub fn info_msg(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), &self.theme, self.stderr_colors);
    }

    pub fn success_msg(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), &self.theme, self.stderr_colors);
    }

    pub fn error_msg(&self, msg: impl AsRef<str>) {
        let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), &self.theme, self.stderr_colors);
    }
}

/// Converts a 1-based position from the command line into a list index.
pub fn position_to_index(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        bail!("No rule at position {} (the list holds {} rule(s)).", position, len);
    }
    Ok(position - 1)
}

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli.settings)?;
    match cli.command {
        Commands::Classify(cmd) => classify::run_classify(cmd, &ctx),
        Commands::Check => check::run_check(&ctx),
        Commands::Rules(cmd) => rules::run_rules(cmd, &ctx),
        Commands::Censor(cmd) => censor::run_censor(cmd, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(position_to_index(1, 3).unwrap(), 0);
        assert_eq!(position_to_index(3, 3).unwrap(), 2);
        assert!(position_to_index(0, 3).is_err());
        assert!(position_to_index(4, 3).is_err());
        assert!(position_to_index(1, 0).is_err());
    }
}
