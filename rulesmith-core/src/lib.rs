// rulesmith-core/src/lib.rs
//! # rulesmith Core Library
//!
//! `rulesmith-core` manages two independent, ordered collections of
//! find/replace rules used when publishing documents:
//!
//! * path/title rules, which rewrite folder segments and document titles
//!   (titles become file names), and
//! * content censor rules, which rewrite document bodies before or after an
//!   external conversion step.
//!
//! The library never runs the rules against content. Its job is the editing
//! lifecycle around them and, above all, the validation policy that decides
//! whether a pattern or replacement would produce an illegal path or file
//! name.
//!
//! ## Modules
//!
//! * `config`: Rule types, the persisted settings document, legacy migration, load/save.
//! * `store`: `RuleStore<T>`, the ordered list with per-session identities.
//! * `validators`: `classify`, the path/title filename policy.
//! * `notice`: User-facing `Notice`s and the `NoticeSink` / `EditorHost` seams.
//! * `sessions`: `RegexRuleSet` (validated save transaction) and `ContentCensorSet`.
//! * `errors`: The `RulesmithError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use rulesmith_core::{FolderBehavior, LogHost, RegexRuleSet, RuleCategory, RuleSettings};
//!
//! let mut settings = RuleSettings::default();
//! settings.upload.behavior = FolderBehavior::Obsidian;
//!
//! let mut host = LogHost;
//! let mut session = RegexRuleSet::from_settings(&settings.upload);
//! let id = session.add_rule(&mut host);
//! session.edit_pattern(id, "^drafts").unwrap();
//! session.edit_replacement(id, "posts").unwrap();
//! session.set_category(id, RuleCategory::Path, &mut host).unwrap();
//!
//! session.commit_into(&mut settings.upload, &mut host).unwrap();
//! assert_eq!(settings.upload.replace_path.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Forbidden values are recovered locally: the field is emptied and a notice
//! is raised. A save transaction containing any forbidden field fails as a
//! whole with `RulesmithError::ValidationFailed`. File access uses
//! `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod notice;
pub mod sessions;
pub mod store;
pub mod validators;

/// Re-exports the rule types and settings document.
pub use config::{
    default_settings_path,
    migrate_categories,
    CensorPhase,
    CensorRule,
    ConversionSettings,
    FolderBehavior,
    PathTitleRule,
    RuleCategory,
    RuleSettings,
    StoredRegexRule,
    UploadSettings,
    SETTINGS_FILE_NAME,
};

pub use errors::RulesmithError;

pub use notice::{CollectingHost, EditorHost, LogHost, Notice, NoticeLevel, NoticeSink};

pub use sessions::censor::ContentCensorSet;
pub use sessions::regex_rules::{validate_and_commit, PartitionedRules, RegexRuleSet, RuleSetHeading};

pub use store::{RuleId, RuleStore};

pub use validators::{classify, Classification};
