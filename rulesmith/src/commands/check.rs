//! `rulesmith check`: a dry-run save of the stored path/title rules.

use std::process::ExitCode;

use anyhow::Result;
use rulesmith_core::{RegexRuleSet, RuleSettings};

use crate::commands::{CommandContext, EXIT_VALIDATION_FAILED};
use crate::ui::terminal_host::TerminalHost;

pub fn run_check(ctx: &CommandContext) -> Result<ExitCode> {
    let settings = RuleSettings::load_or_default(&ctx.settings_path)?;
    let mut session = RegexRuleSet::from_settings(&settings.upload);
    let mut host = TerminalHost::new(&ctx.theme, ctx.stderr_colors);

    // The sanitized session is dropped; nothing is written.
    match session.validate_and_commit(&mut host) {
        Ok(partitioned) => {
            ctx.info_msg(format!(
                "{} path rule(s) and {} title rule(s) are valid ({} warning(s)).",
                partitioned.path.len(),
                partitioned.title.len(),
                host.warnings
            ));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_validation_failure() => {
            ctx.error_msg(e.to_string());
            Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
        }
        Err(e) => Err(e.into()),
    }
}
