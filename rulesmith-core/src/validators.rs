// File: rulesmith-core/src/validators.rs
//! Filename validation for path/title rule fields.
//!
//! Titles become file names, so path separators and the reserved filesystem
//! characters are never allowed in them. Paths legitimately contain `/`, so
//! only the remaining reserved characters and backslashes are forbidden there,
//! and a slash run that looks like `word/word` is only flagged.
//!
//! Classification is pure: it returns the verdict and at most one [`Notice`],
//! and the caller decides where the notice goes.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RuleCategory;
use crate::notice::Notice;

/// The only value forbidden for every category.
pub const ROOT_SEPARATOR: &str = "/";

// `[[:word:]]` is the ASCII word class.
static TITLE_FORBIDDEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[><:"|?*]|\\/|^[[:word:]]+/[[:word:]]+|\\"#)
        .expect("title forbidden-character pattern is valid")
});

static PATH_FORBIDDEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\\><:"|?*]"#).expect("path forbidden-character pattern is valid")
});

static PATH_AMBIGUOUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:word:]]+/[[:word:]]+|\\/").expect("ambiguous path pattern is valid")
});

/// Verdict for one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The value to keep: empty when forbidden, unchanged otherwise.
    pub sanitized_value: String,
    pub forbidden: bool,
    /// The single notice raised for this value, if any.
    pub notice: Option<Notice>,
}

impl Classification {
    fn clean(value: &str) -> Self {
        Self {
            sanitized_value: value.to_string(),
            forbidden: false,
            notice: None,
        }
    }

    fn forbidden(category: RuleCategory, offending: &str) -> Self {
        warn!(
            "Forbidden value for {} rule: '{}' cannot appear in a {} name.",
            category,
            offending,
            category.noun()
        );
        Self {
            sanitized_value: String::new(),
            forbidden: true,
            notice: Some(Notice::Forbidden {
                category,
                offending: offending.to_string(),
            }),
        }
    }

    /// The non-blocking notice, when the value was accepted with a warning.
    pub fn warning(&self) -> Option<&Notice> {
        if self.forbidden {
            None
        } else {
            self.notice.as_ref()
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.forbidden && self.notice.is_none()
    }
}

/// Classifies `value` as the pattern or replacement of a rule in `category`.
///
/// Checks run in order and the first match wins:
/// 1. `/` alone is forbidden everywhere.
/// 2. Titles: `[><:"|?*]`, `\/`, a leading `word/word` run, or `\` are forbidden.
/// 3. Paths: `\` or `[><:"|?*]` are forbidden.
/// 4. Paths: a leading `word/word` run or `\/` raises a warning only.
pub fn classify(value: &str, category: RuleCategory) -> Classification {
    if value == ROOT_SEPARATOR {
        return Classification::forbidden(category, value);
    }

    match category {
        RuleCategory::Title => {
            if let Some(m) = TITLE_FORBIDDEN.find(value) {
                return Classification::forbidden(category, m.as_str());
            }
        }
        RuleCategory::Path => {
            if let Some(m) = PATH_FORBIDDEN.find(value) {
                return Classification::forbidden(category, m.as_str());
            }
            if PATH_AMBIGUOUS.is_match(value) {
                warn!("Ambiguous path segment accepted: '{}'.", value);
                return Classification {
                    sanitized_value: value.to_string(),
                    forbidden: false,
                    notice: Some(Notice::AmbiguousPath {
                        value: value.to_string(),
                    }),
                };
            }
        }
    }

    debug!("Value '{}' is clean for a {} rule.", value, category);
    Classification::clean(value)
}
