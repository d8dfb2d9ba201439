//! `rulesmith rules ...`: path/title rule editing.
//!
//! Every mutating command opens a session, applies one change, and runs the
//! save transaction. The settings file is only written when it succeeds.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;
use rulesmith_core::{FolderBehavior, RegexRuleSet, RuleCategory, RuleId, RuleSettings};

use crate::cli::RulesCommand;
use crate::commands::{position_to_index, CommandContext, EXIT_VALIDATION_FAILED};
use crate::ui::rule_table;
use crate::ui::terminal_host::TerminalHost;

fn id_at_position(session: &RegexRuleSet, position: usize) -> Result<RuleId> {
    let index = position_to_index(position, session.len())?;
    session
        .id_at(index)
        .with_context(|| format!("No rule at position {}", position))
}

pub fn run_rules(cmd: RulesCommand, ctx: &CommandContext) -> Result<ExitCode> {
    let mut settings = RuleSettings::load_or_default(&ctx.settings_path)?;
    let mut session = RegexRuleSet::from_settings(&settings.upload);
    let mut host = TerminalHost::new(&ctx.theme, ctx.stderr_colors);

    let summary = match cmd {
        RulesCommand::List { json } => {
            if json {
                println!("{}", rule_table::rules_to_json(session.rules())?);
            } else {
                let heading = format!("{} (folder behavior: {})", session.heading().text(), session.behavior());
                rule_table::print_path_title_rules(
                    &mut io::stdout(),
                    &heading,
                    session.rules(),
                    &ctx.theme,
                    ctx.stdout_colors,
                )?;
            }
            return Ok(ExitCode::SUCCESS);
        }
        RulesCommand::Behavior { behavior } => {
            // Rules are untouched, so the file is written without a commit.
            settings.upload.behavior = FolderBehavior::from(behavior);
            settings.save_to_file(&ctx.settings_path)?;
            ctx.success_msg(format!(
                "Folder behavior set to '{}'. ({})",
                settings.upload.behavior,
                ctx.settings_path.display()
            ));
            return Ok(ExitCode::SUCCESS);
        }
        RulesCommand::Add { pattern, replacement, category } => {
            let id = session.add_rule(&mut host);
            session.edit_pattern(id, pattern)?;
            session.edit_replacement(id, replacement)?;
            if let Some(category) = category.map(RuleCategory::from) {
                if session.get(id).map(|rule| rule.category) != Some(category) {
                    session.set_category(id, category, &mut host)?;
                }
            }
            format!("Added rule at position {}.", session.len())
        }
        RulesCommand::Remove { position } => {
            let id = id_at_position(&session, position)?;
            session.remove_by_identity(id, &mut host);
            format!("Removed rule at position {}.", position)
        }
        RulesCommand::Edit { position, pattern, replacement } => {
            let id = id_at_position(&session, position)?;
            if let Some(pattern) = pattern {
                session.edit_pattern(id, pattern)?;
            }
            if let Some(replacement) = replacement {
                session.edit_replacement(id, replacement)?;
            }
            format!("Updated rule at position {}.", position)
        }
        RulesCommand::SetCategory { position, category } => {
            let id = id_at_position(&session, position)?;
            let category = RuleCategory::from(category);
            session.set_category(id, category, &mut host)?;
            format!("Rule at position {} now targets {} names.", position, category.noun())
        }
    };

    match session.commit_into(&mut settings.upload, &mut host) {
        Ok(()) => {
            settings.save_to_file(&ctx.settings_path)?;
            debug!("Settings written after rules command.");
            ctx.success_msg(format!("{} ({})", summary, ctx.settings_path.display()));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_validation_failure() => {
            ctx.error_msg(e.to_string());
            Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
        }
        Err(e) => Err(e.into()),
    }
}
