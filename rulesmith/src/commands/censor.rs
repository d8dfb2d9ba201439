//! `rulesmith censor ...`: content censor rule editing. Commits always succeed.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rulesmith_core::{ContentCensorSet, RuleId, RuleSettings};

use crate::cli::CensorCommand;
use crate::commands::{position_to_index, CommandContext};
use crate::ui::rule_table;
use crate::ui::terminal_host::TerminalHost;

fn id_at_position(session: &ContentCensorSet, position: usize) -> Result<RuleId> {
    let index = position_to_index(position, session.len())?;
    session
        .id_at(index)
        .with_context(|| format!("No censor rule at position {}", position))
}

pub fn run_censor(cmd: CensorCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let mut settings = RuleSettings::load_or_default(&ctx.settings_path)?;
    let mut session = ContentCensorSet::from_settings(&settings.conversion);
    let mut host = TerminalHost::new(&ctx.theme, ctx.stderr_colors);

    let summary = match cmd {
        CensorCommand::List { json } => {
            if json {
                println!("{}", rule_table::rules_to_json(session.rules())?);
            } else {
                rule_table::print_censor_rules(&mut io::stdout(), session.rules(), &ctx.theme, ctx.stdout_colors)?;
            }
            return Ok(ExitCode::SUCCESS);
        }
        CensorCommand::Add { pattern, replacement, after } => {
            let id = session.add_rule(&mut host);
            session.edit_pattern(id, pattern)?;
            session.edit_replacement(id, replacement)?;
            if after {
                session.toggle_phase(id, &mut host)?;
            }
            format!("Added censor rule at position {}.", session.len())
        }
        CensorCommand::Remove { position } => {
            let id = id_at_position(&session, position)?;
            session.remove_by_identity(id, &mut host);
            format!("Removed censor rule at position {}.", position)
        }
        CensorCommand::Edit { position, pattern, replacement } => {
            let id = id_at_position(&session, position)?;
            if let Some(pattern) = pattern {
                session.edit_pattern(id, pattern)?;
            }
            if let Some(replacement) = replacement {
                session.edit_replacement(id, replacement)?;
            }
            format!("Updated censor rule at position {}.", position)
        }
        CensorCommand::Toggle { position } => {
            let id = id_at_position(&session, position)?;
            let phase = session.toggle_phase(id, &mut host)?;
            format!("Censor rule at position {} now runs {} the conversion.", position, phase)
        }
    };

    session.commit_into(&mut settings.conversion);
    settings.save_to_file(&ctx.settings_path)?;
    ctx.success_msg(format!("{} ({})", summary, ctx.settings_path.display()));
    Ok(ExitCode::SUCCESS)
}
