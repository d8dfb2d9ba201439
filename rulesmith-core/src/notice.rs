//! User-facing notices and the host seams that receive them.
//!
//! The validator never shows anything itself. It returns a [`Notice`] and the
//! caller dispatches it to a [`NoticeSink`], which is whatever toast, stderr
//! printer or log the host provides. Localization also belongs to the host:
//! the `Display` impl here is the English fallback.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::config::RuleCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Error,
    Warning,
}

/// One message raised while classifying a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The value can never be part of a folder or file name. `offending`
    /// is the first matched substring (or the whole value for `/`).
    Forbidden {
        category: RuleCategory,
        offending: String,
    },
    /// A path value with an ambiguous slash run. Accepted unchanged.
    AmbiguousPath { value: String },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Forbidden { .. } => NoticeLevel::Error,
            Notice::AmbiguousPath { .. } => NoticeLevel::Warning,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notice::Forbidden { category, offending } => write!(
                f,
                "Forbidden value in a {} name: \"{}\". The field has been cleared.",
                category.noun(),
                offending
            ),
            Notice::AmbiguousPath { value } => write!(
                f,
                "Ambiguous path segment \"{}\": it will be read as nested folders.",
                value
            ),
        }
    }
}

/// Receives notices one by one, in the order they are raised.
pub trait NoticeSink {
    fn notify(&mut self, notice: &Notice);
}

/// The editing surface around a session.
///
/// `redraw` is invoked after every structural mutation (add, remove,
/// category or phase change) and after a rejected commit, with the new rule
/// count. Hosts without a surface keep the default.
pub trait EditorHost: NoticeSink {
    fn redraw(&mut self, rules: usize) {
        let _ = rules;
    }
}

/// Host that forwards every notice to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl NoticeSink for LogHost {
    fn notify(&mut self, notice: &Notice) {
        warn!("{}", notice);
    }
}

impl EditorHost for LogHost {}

/// Host that keeps every notice it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingHost {
    pub notices: Vec<Notice>,
    pub redraws: usize,
}

impl CollectingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forbidden_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| n.level() == NoticeLevel::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| n.level() == NoticeLevel::Warning)
            .count()
    }
}

impl NoticeSink for CollectingHost {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

impl EditorHost for CollectingHost {
    fn redraw(&mut self, _rules: usize) {
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_message_names_the_target() {
        let folder = Notice::Forbidden {
            category: RuleCategory::Path,
            offending: "/".to_string(),
        };
        let file = Notice::Forbidden {
            category: RuleCategory::Title,
            offending: "|".to_string(),
        };
        assert!(folder.to_string().contains("folder name"));
        assert!(folder.to_string().contains("\"/\""));
        assert!(file.to_string().contains("file name"));
        assert_eq!(file.level(), NoticeLevel::Error);
    }

    #[test]
    fn ambiguous_path_is_a_warning() {
        let notice = Notice::AmbiguousPath {
            value: "folder/sub".to_string(),
        };
        assert_eq!(notice.level(), NoticeLevel::Warning);
        assert!(notice.to_string().starts_with("Ambiguous path segment"));
    }

    #[test]
    fn collecting_host_counts_levels() {
        let mut host = CollectingHost::new();
        host.notify(&Notice::AmbiguousPath { value: "a/b".into() });
        host.notify(&Notice::Forbidden {
            category: RuleCategory::Path,
            offending: "?".into(),
        });
        host.redraw(0);
        assert_eq!(host.warning_count(), 1);
        assert_eq!(host.forbidden_count(), 1);
        assert_eq!(host.redraws, 1);
    }
}
