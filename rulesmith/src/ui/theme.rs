//! Terminal color theme for `rulesmith` output.
//!
//! Each logical kind of output maps to an ANSI foreground color. Coloring is
//! only applied when the target stream is a terminal.

use std::collections::HashMap;

use owo_colors::{AnsiColors, OwoColorize};

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, AnsiColors>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Section titles, e.g. the rule list heading.
    Header,
    /// Successful saves.
    Success,
    /// General informational messages.
    Info,
    /// Ambiguous values and other non-blocking notices.
    Warn,
    /// Forbidden values and failures.
    Error,
    /// Rule positions in listings.
    RuleIndex,
}

/// Returns the default theme map.
pub fn default_theme_map() -> ThemeMap {
    let mut theme = HashMap::new();
    theme.insert(ThemeEntry::Header, AnsiColors::BrightWhite);
    theme.insert(ThemeEntry::Success, AnsiColors::Green);
    theme.insert(ThemeEntry::Info, AnsiColors::Cyan);
    theme.insert(ThemeEntry::Warn, AnsiColors::Yellow);
    theme.insert(ThemeEntry::Error, AnsiColors::Red);
    theme.insert(ThemeEntry::RuleIndex, AnsiColors::BrightBlack);
    theme
}

/// Applies the color of `entry` to `text` when `enable_colors` is set.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    let color = theme.get(&entry).copied().unwrap_or(AnsiColors::White);
    text.color(color).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_when_colors_disabled() {
        let theme = default_theme_map();
        assert_eq!(styled("saved", ThemeEntry::Success, &theme, false), "saved");
    }

    #[test]
    fn colored_output_wraps_text() {
        let theme = default_theme_map();
        let out = styled("oops", ThemeEntry::Error, &theme, true);
        assert!(out.contains("oops"));
        assert_ne!(out, "oops");
    }
}
