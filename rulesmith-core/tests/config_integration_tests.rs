// rulesmith-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

use rulesmith_core::config::{self, CensorPhase, CensorRule, FolderBehavior, RuleCategory, RuleSettings, StoredRegexRule};

#[test]
fn test_load_legacy_yaml_file() -> Result<()> {
    let yaml_content = r#"
upload:
  behavior: obsidian
  replace_path:
    - regex: "^Inbox"
      replacement: "drafts"
  replace_title:
    - regex: " \\(copy\\)"
      replacement: ""
conversion:
  censor_text:
    - entry: "%%.*%%"
      replace: ""
      after: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let settings = RuleSettings::load_from_file(file.path())?;
    assert_eq!(settings.upload.behavior, FolderBehavior::Obsidian);
    assert_eq!(settings.upload.replace_path[0].category, None);
    assert_eq!(settings.upload.replace_title[0].pattern, " \\(copy\\)");
    assert_eq!(settings.conversion.censor_text[0], CensorRule::new("%%.*%%", "", CensorPhase::Before));

    let migrated = config::migrate_categories(&settings.upload);
    assert_eq!(migrated[0].category, RuleCategory::Path);
    assert_eq!(migrated[1].category, RuleCategory::Title);
    Ok(())
}

#[test]
fn test_save_then_load_preserves_order() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("settings.yaml");

    let mut settings = RuleSettings::default();
    settings.upload.replace_title = ["one", "two", "three"]
        .iter()
        .map(|p| StoredRegexRule {
            pattern: p.to_string(),
            replacement: String::new(),
            category: Some(RuleCategory::Title),
        })
        .collect();
    settings.conversion.censor_text.push(CensorRule::new("x", "y", CensorPhase::After));

    settings.save_to_file(&path)?;
    let reloaded = RuleSettings::load_from_file(&path)?;

    assert_eq!(reloaded, settings);
    let order: Vec<_> = reloaded.upload.replace_title.iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(order, vec!["one", "two", "three"]);
    assert!(!dir.path().join("nested").join("settings.yaml.tmp").exists());
    Ok(())
}

#[test]
fn test_json_settings_round_trip() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("settings.json");

    let mut settings = RuleSettings::default();
    settings.upload.behavior = FolderBehavior::Yaml;
    settings.save_to_file(&path)?;

    let text = fs::read_to_string(&path)?;
    assert!(text.trim_start().starts_with('{'));
    assert_eq!(RuleSettings::load_from_file(&path)?.upload.behavior, FolderBehavior::Yaml);
    Ok(())
}

#[test]
fn test_missing_file_yields_defaults() -> Result<()> {
    let dir = tempdir()?;
    let settings = RuleSettings::load_or_default(dir.path().join("absent.yaml"))?;
    assert_eq!(settings, RuleSettings::default());
    Ok(())
}

#[test]
fn test_malformed_file_reports_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"upload: [this, is, not, a, map]")?;

    let err = RuleSettings::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse settings file"));
    Ok(())
}

#[test]
fn test_save_without_extension_leaves_only_the_settings_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("settings");

    let mut settings = RuleSettings::default();
    settings.upload.behavior = FolderBehavior::Obsidian;
    settings.save_to_file(&path)?;
    settings.save_to_file(&path)?;

    let names: Vec<_> = fs::read_dir(dir.path())?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    assert_eq!(names, vec!["settings".to_string()]);
    assert_eq!(RuleSettings::load_from_file(&path)?.upload.behavior, FolderBehavior::Obsidian);
    Ok(())
}
