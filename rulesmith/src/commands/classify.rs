//! `rulesmith classify`: one value through the filename policy.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::info;
use rulesmith_core::{classify, NoticeSink, RuleCategory};

use crate::cli::ClassifyCommand;
use crate::commands::{CommandContext, EXIT_VALIDATION_FAILED};
use crate::ui::terminal_host::TerminalHost;

/// Prints `clean`, `warning` or `forbidden` on stdout; the notice, if any,
/// goes to stderr. Exits with the validation code when forbidden.
pub fn run_classify(cmd: ClassifyCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let category = RuleCategory::from(cmd.category);
    let verdict = classify(&cmd.value, category);
    info!("Classified {:?} as a {} value.", cmd.value, category);

    let mut host = TerminalHost::new(&ctx.theme, ctx.stderr_colors);
    if let Some(notice) = &verdict.notice {
        host.notify(notice);
    }

    let label = if verdict.forbidden {
        "forbidden"
    } else if verdict.warning().is_some() {
        "warning"
    } else {
        "clean"
    };
    writeln!(io::stdout(), "{}", label)?;

    if verdict.forbidden {
        Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
