//! Configuration management for `rulesmith-core`.
//!
//! This module defines the rule data structures and the persisted settings
//! document that holds them. It handles YAML/JSON (de)serialization, the
//! one-time migration of legacy rules that predate the category field, and
//! loading/saving the settings file.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name of the settings document inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

const SETTINGS_FILE_TMP_SUFFIX: &str = "tmp";

/// Which kind of name a path/title rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// A folder segment of the output path.
    Path,
    /// The document title, which becomes the file name.
    Title,
}

impl RuleCategory {
    /// The noun used in user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            RuleCategory::Path => "folder",
            RuleCategory::Title => "file",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleCategory::Path => write!(f, "path"),
            RuleCategory::Title => write!(f, "title"),
        }
    }
}

impl FromStr for RuleCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "path" | "folder" => Ok(RuleCategory::Path),
            "title" | "file" => Ok(RuleCategory::Title),
            other => Err(anyhow!("Unknown rule category '{}': expected 'path' or 'title'.", other)),
        }
    }
}

/// A find/replace rule applied to a folder segment or to a title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PathTitleRule {
    #[serde(alias = "regex")]
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(alias = "type")]
    pub category: RuleCategory,
}

impl PathTitleRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>, category: RuleCategory) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            category,
        }
    }

    /// The blank rule created by "add". New rules target titles.
    pub fn empty() -> Self {
        Self::new("", "", RuleCategory::Title)
    }
}

/// Persisted form of a path/title rule. Settings written before categories
/// existed have no `category`; see [`migrate_categories`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoredRegexRule {
    #[serde(alias = "regex")]
    pub pattern: String,
    pub replacement: String,
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<RuleCategory>,
}

impl StoredRegexRule {
    fn into_rule(self, fallback: RuleCategory) -> PathTitleRule {
        PathTitleRule {
            pattern: self.pattern,
            replacement: self.replacement,
            category: self.category.unwrap_or(fallback),
        }
    }
}

impl From<PathTitleRule> for StoredRegexRule {
    fn from(rule: PathTitleRule) -> Self {
        Self {
            pattern: rule.pattern,
            replacement: rule.replacement,
            category: Some(rule.category),
        }
    }
}

/// When a censor rule runs relative to the external content conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CensorPhase {
    #[default]
    Before,
    After,
}

impl CensorPhase {
    pub fn toggled(self) -> Self {
        match self {
            CensorPhase::Before => CensorPhase::After,
            CensorPhase::After => CensorPhase::Before,
        }
    }
}

impl fmt::Display for CensorPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CensorPhase::Before => write!(f, "before"),
            CensorPhase::After => write!(f, "after"),
        }
    }
}

/// A find/replace rule applied to document bodies. Body text has no
/// filesystem constraints, so these rules are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "StoredCensorRule")]
pub struct CensorRule {
    pub pattern: String,
    pub replacement: String,
    pub phase: CensorPhase,
}

impl CensorRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>, phase: CensorPhase) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            phase,
        }
    }
}

/// Accepts both the current shape and the legacy `{entry, replace, after}` one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredCensorRule {
    #[serde(alias = "entry")]
    pattern: String,
    #[serde(alias = "replace")]
    replacement: String,
    phase: Option<CensorPhase>,
    after: Option<bool>,
}

impl From<StoredCensorRule> for CensorRule {
    fn from(stored: StoredCensorRule) -> Self {
        let phase = stored.phase.unwrap_or(match stored.after {
            Some(true) => CensorPhase::After,
            _ => CensorPhase::Before,
        });
        Self {
            pattern: stored.pattern,
            replacement: stored.replacement,
            phase,
        }
    }
}

/// How the output folder of a document is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderBehavior {
    /// Every document lands in one fixed folder; only titles can be rewritten.
    #[default]
    Fixed,
    /// The folder comes from a frontmatter key.
    Yaml,
    /// The folder mirrors the vault structure.
    Obsidian,
}

impl FolderBehavior {
    pub fn locks_category(self) -> bool {
        self == FolderBehavior::Fixed
    }
}

impl fmt::Display for FolderBehavior {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FolderBehavior::Fixed => "fixed",
            FolderBehavior::Yaml => "yaml",
            FolderBehavior::Obsidian => "obsidian",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadSettings {
    pub behavior: FolderBehavior,
    #[serde(deserialize_with = "nullable_list")]
    pub replace_path: Vec<StoredRegexRule>,
    #[serde(deserialize_with = "nullable_list")]
    pub replace_title: Vec<StoredRegexRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionSettings {
    #[serde(deserialize_with = "nullable_list")]
    pub censor_text: Vec<CensorRule>,
}

/// The persisted settings document: two category-partitioned path/title
/// lists and one flat censor list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleSettings {
    pub upload: UploadSettings,
    pub conversion: ConversionSettings,
}

/// Treats an explicit `null` list like a missing one.
fn nullable_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stamps a category on every stored path/title rule and returns them as one
/// canonical ordered list: the path list first, then the title list.
///
/// Rules without a category take the category of the list they were stored
/// in. Explicit categories are kept even when they disagree with the list.
pub fn migrate_categories(upload: &UploadSettings) -> Vec<PathTitleRule> {
    let mut stamped = 0usize;
    let mut rules = Vec::with_capacity(upload.replace_path.len() + upload.replace_title.len());

    for (stored, fallback) in upload
        .replace_path
        .iter()
        .map(|r| (r, RuleCategory::Path))
        .chain(upload.replace_title.iter().map(|r| (r, RuleCategory::Title)))
    {
        if stored.category.is_none() {
            stamped += 1;
        }
        rules.push(stored.clone().into_rule(fallback));
    }

    if stamped > 0 {
        info!("Migrated {} legacy rule(s) without a category.", stamped);
    }
    debug!("Loaded {} path/title rule(s) into the session.", rules.len());
    rules
}

impl RuleSettings {
    /// Loads settings from a YAML file, or JSON when the extension is `.json`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;

        let settings: RuleSettings = if is_json(path) {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse settings file {}", path.display()))?
        } else {
            Self::from_yaml_str(&text)
                .with_context(|| format!("Failed to parse settings file {}", path.display()))?
        };

        debug!(
            "Settings loaded: {} path rule(s), {} title rule(s), {} censor rule(s).",
            settings.upload.replace_path.len(),
            settings.upload.replace_title.len(),
            settings.conversion.censor_text.len()
        );
        Ok(settings)
    }

    /// Like [`RuleSettings::load_from_file`], but a missing file yields defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings file at {}, starting from defaults.", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yml::to_string(self).context("Failed to serialize settings to YAML")
    }

    /// Overwrites the settings file wholesale. The document is written to a
    /// sibling temp file first and renamed into place.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
            }
        }

        let body = if is_json(path) {
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?
        } else {
            self.to_yaml_string()?
        };

        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow!("Settings path {} does not name a file", path.display()))?;
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".");
        tmp_name.push(SETTINGS_FILE_TMP_SUFFIX);
        let tmp_path = path.with_file_name(tmp_name);
        fs::write(&tmp_path, body)
            .with_context(|| format!("Failed to write settings file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move settings into place at {}", path.display()))?;

        info!("Settings saved to {}.", path.display());
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// `<config_dir>/rulesmith/settings.yaml`.
pub fn default_settings_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("rulesmith").join(SETTINGS_FILE_NAME))
        .context("Could not determine the user configuration directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rules_take_the_category_of_their_list() {
        let upload = UploadSettings {
            behavior: FolderBehavior::Obsidian,
            replace_path: vec![StoredRegexRule {
                pattern: "drafts".into(),
                replacement: "posts".into(),
                category: None,
            }],
            replace_title: vec![
                StoredRegexRule {
                    pattern: "WIP ".into(),
                    replacement: "".into(),
                    category: None,
                },
                StoredRegexRule {
                    pattern: "misfiled".into(),
                    replacement: "x".into(),
                    category: Some(RuleCategory::Path),
                },
            ],
        };

        let rules = migrate_categories(&upload);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].category, RuleCategory::Path);
        assert_eq!(rules[1].category, RuleCategory::Title);
        assert_eq!(rules[2].category, RuleCategory::Path);
        assert_eq!(rules[1].pattern, "WIP ");
    }

    #[test]
    fn legacy_censor_shape_is_accepted() {
        let yaml = r#"
conversion:
  censor_text:
    - entry: "secret"
      replace: "[hidden]"
      after: true
    - pattern: "draft"
      replacement: ""
"#;
        let settings = RuleSettings::from_yaml_str(yaml).unwrap();
        let censor = &settings.conversion.censor_text;
        assert_eq!(censor[0], CensorRule::new("secret", "[hidden]", CensorPhase::After));
        assert_eq!(censor[1].phase, CensorPhase::Before);
    }

    #[test]
    fn legacy_regex_field_names_are_accepted() {
        let yaml = r#"
upload:
  behavior: yaml
  replace_path:
    - regex: "^notes"
      replacement: "blog"
      type: path
  replace_title: ~
"#;
        let settings = RuleSettings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.upload.behavior, FolderBehavior::Yaml);
        assert_eq!(settings.upload.replace_path[0].pattern, "^notes");
        assert_eq!(settings.upload.replace_path[0].category, Some(RuleCategory::Path));
        assert!(settings.upload.replace_title.is_empty());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let settings = RuleSettings::from_yaml_str("   \n").unwrap();
        assert_eq!(settings, RuleSettings::default());
        assert_eq!(settings.upload.behavior, FolderBehavior::Fixed);
    }

    #[test]
    fn category_parsing_accepts_nouns() {
        assert_eq!("Folder".parse::<RuleCategory>().unwrap(), RuleCategory::Path);
        assert_eq!("title".parse::<RuleCategory>().unwrap(), RuleCategory::Title);
        assert!("body".parse::<RuleCategory>().is_err());
    }

    #[test]
    fn phase_toggles_both_ways() {
        assert_eq!(CensorPhase::Before.toggled(), CensorPhase::After);
        assert_eq!(CensorPhase::After.toggled().toggled(), CensorPhase::After);
    }
}
