//! Formatting helpers for messages written to the terminal.

use std::io::{self, Write};

use rulesmith_core::{Notice, NoticeLevel};

use crate::ui::theme::{styled, ThemeEntry, ThemeMap};

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", styled(prefix, entry, theme, enable_colors), msg)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Info:", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Saved:", msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning:", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Error:", msg, ThemeEntry::Error, theme, enable_colors)
}

/// Prints a validation notice with the style matching its level.
pub fn print_notice<W: Write>(writer: &mut W, notice: &Notice, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    let msg = notice.to_string();
    match notice.level() {
        NoticeLevel::Error => print_error_message(writer, &msg, theme, enable_colors),
        NoticeLevel::Warning => print_warn_message(writer, &msg, theme, enable_colors),
    }
}
