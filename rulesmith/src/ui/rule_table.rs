//! Table and JSON listings of the two rule collections.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use rulesmith_core::{CensorRule, PathTitleRule};

use crate::ui::theme::{styled, ThemeEntry, ThemeMap};

#[derive(Serialize)]
struct Row<'a, T> {
    position: usize,
    #[serde(flatten)]
    rule: &'a T,
}

/// Renders `rules` as a JSON array of `{position, ...rule}` objects.
pub fn rules_to_json<T: Serialize>(rules: &[T]) -> serde_json::Result<String> {
    let rows: Vec<Row<'_, T>> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| Row { position: i + 1, rule })
        .collect();
    serde_json::to_string_pretty(&rows)
}

fn empty_cell(value: &str) -> String {
    if value.is_empty() { "(empty)".to_string() } else { value.to_string() }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_path_title_rules<W: Write>(
    writer: &mut W,
    heading: &str,
    rules: &[PathTitleRule],
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(heading, ThemeEntry::Header, theme, enable_colors))?;
    if rules.is_empty() {
        return writeln!(writer, "No rules yet.");
    }
    let mut table = new_table(vec!["#", "Pattern", "Replacement", "Category"]);
    for (i, rule) in rules.iter().enumerate() {
        table.add_row(vec![
            styled(&(i + 1).to_string(), ThemeEntry::RuleIndex, theme, enable_colors),
            empty_cell(&rule.pattern),
            empty_cell(&rule.replacement),
            rule.category.to_string(),
        ]);
    }
    writeln!(writer, "{table}")
}

pub fn print_censor_rules<W: Write>(
    writer: &mut W,
    rules: &[CensorRule],
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled("Content censor rules", ThemeEntry::Header, theme, enable_colors))?;
    if rules.is_empty() {
        return writeln!(writer, "No rules yet.");
    }
    let mut table = new_table(vec!["#", "Pattern", "Replacement", "Applied"]);
    for (i, rule) in rules.iter().enumerate() {
        table.add_row(vec![
            styled(&(i + 1).to_string(), ThemeEntry::RuleIndex, theme, enable_colors),
            empty_cell(&rule.pattern),
            empty_cell(&rule.replacement),
            format!("{} conversion", rule.phase),
        ]);
    }
    writeln!(writer, "{table}")
}
