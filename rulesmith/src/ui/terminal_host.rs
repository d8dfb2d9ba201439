//! The terminal as an editing host: notices go to stderr as they are raised.

use std::io;

use log::debug;
use rulesmith_core::{EditorHost, Notice, NoticeLevel, NoticeSink};

use crate::ui::output_format::print_notice;
use crate::ui::theme::ThemeMap;

pub struct TerminalHost<'a> {
    theme: &'a ThemeMap,
    enable_colors: bool,
    pub forbidden: usize,
    pub warnings: usize,
}

impl<'a> TerminalHost<'a> {
    pub fn new(theme: &'a ThemeMap, enable_colors: bool) -> Self {
        Self {
            theme,
            enable_colors,
            forbidden: 0,
            warnings: 0,
        }
    }
}

impl NoticeSink for TerminalHost<'_> {
    fn notify(&mut self, notice: &Notice) {
        match notice.level() {
            NoticeLevel::Error => self.forbidden += 1,
            NoticeLevel::Warning => self.warnings += 1,
        }
        let _ = print_notice(&mut io::stderr(), notice, self.theme, self.enable_colors);
    }
}

impl EditorHost for TerminalHost<'_> {
    fn redraw(&mut self, rules: usize) {
        debug!("Rule list changed, {} rule(s) in session.", rules);
    }
}
