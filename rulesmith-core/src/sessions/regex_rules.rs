// rulesmith-core/src/sessions/regex_rules.rs
//! Editing session and save transaction for path/title replacement rules.
//!
//! The session keeps one canonical ordered list tagged by category. The two
//! category-pure lists only exist at the persistence boundary, built on a
//! successful commit.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};

use crate::config::{migrate_categories, FolderBehavior, PathTitleRule, RuleCategory, StoredRegexRule, UploadSettings};
use crate::errors::RulesmithError;
use crate::notice::{EditorHost, NoticeSink};
use crate::store::{RuleId, RuleStore};
use crate::validators::classify;

/// Path/title rules split back into the two persisted lists, order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedRules {
    pub path: Vec<PathTitleRule>,
    pub title: Vec<PathTitleRule>,
}

impl PartitionedRules {
    pub fn partition(rules: &[PathTitleRule]) -> Self {
        let (path, title) = rules
            .iter()
            .cloned()
            .partition(|rule| rule.category == RuleCategory::Path);
        Self { path, title }
    }

    /// Overwrites both lists of `upload` wholesale.
    pub fn write_into(self, upload: &mut UploadSettings) {
        upload.replace_path = self.path.into_iter().map(StoredRegexRule::from).collect();
        upload.replace_title = self.title.into_iter().map(StoredRegexRule::from).collect();
    }
}

/// Validates every rule and, if nothing is forbidden, partitions them.
///
/// Pattern and replacement of each rule are classified in list order and
/// every notice is dispatched to `sink` as soon as it is raised. Forbidden
/// fields are emptied in place and processing continues, so that all of them
/// can be corrected at once. Any forbidden field fails the whole transaction
/// with [`RulesmithError::ValidationFailed`]; warnings never do.
pub fn validate_and_commit<S>(rules: &mut [PathTitleRule], sink: &mut S) -> Result<PartitionedRules, RulesmithError>
where
    S: NoticeSink + ?Sized,
{
    let mut forbidden = 0usize;

    for rule in rules.iter_mut() {
        let pattern = classify(&rule.pattern, rule.category);
        if let Some(notice) = &pattern.notice {
            sink.notify(notice);
        }
        let replacement = classify(&rule.replacement, rule.category);
        if let Some(notice) = &replacement.notice {
            sink.notify(notice);
        }

        if pattern.forbidden {
            forbidden += 1;
            rule.pattern = pattern.sanitized_value;
        }
        if replacement.forbidden {
            forbidden += 1;
            rule.replacement = replacement.sanitized_value;
        }
    }

    if forbidden > 0 {
        warn!("Commit rejected: {} forbidden field(s) across {} rule(s).", forbidden, rules.len());
        return Err(RulesmithError::ValidationFailed { forbidden });
    }

    let partitioned = PartitionedRules::partition(rules);
    debug!(
        "Commit accepted: {} path rule(s), {} title rule(s).",
        partitioned.path.len(),
        partitioned.title.len()
    );
    Ok(partitioned)
}

/// Heading shown above the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSetHeading {
    /// Folder behavior is fixed: only titles can be rewritten.
    TitlesOnly,
    FoldersAndTitles,
}

impl RuleSetHeading {
    pub fn text(self) -> &'static str {
        match self {
            RuleSetHeading::TitlesOnly => "Replace in file titles",
            RuleSetHeading::FoldersAndTitles => "Replace in folder paths and file titles",
        }
    }
}

/// One editing session over the path/title rules.
#[derive(Debug, Clone, Default)]
pub struct RegexRuleSet {
    store: RuleStore<PathTitleRule>,
    behavior: FolderBehavior,
}

impl RegexRuleSet {
    pub fn new(behavior: FolderBehavior) -> Self {
        Self {
            store: RuleStore::new(),
            behavior,
        }
    }

    /// Opens a session on the persisted lists, migrating legacy rules once.
    pub fn from_settings(upload: &UploadSettings) -> Self {
        Self {
            store: RuleStore::from_rules(migrate_categories(upload)),
            behavior: upload.behavior,
        }
    }

    pub fn behavior(&self) -> FolderBehavior {
        self.behavior
    }

    pub fn heading(&self) -> RuleSetHeading {
        if self.behavior.locks_category() {
            RuleSetHeading::TitlesOnly
        } else {
            RuleSetHeading::FoldersAndTitles
        }
    }

    pub fn rules(&self) -> &[PathTitleRule] {
        self.store.as_slice()
    }

    pub fn id_at(&self, index: usize) -> Option<RuleId> {
        self.store.id_at(index)
    }

    pub fn get(&self, id: RuleId) -> Option<&PathTitleRule> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Appends an empty title rule.
    pub fn add_rule<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> RuleId {
        let id = self.store.append(PathTitleRule::empty());
        host.redraw(self.store.len());
        id
    }

    pub fn remove_by_identity<H: EditorHost + ?Sized>(&mut self, id: RuleId, host: &mut H) -> Option<PathTitleRule> {
        let removed = self.store.remove_by_identity(id);
        if removed.is_some() {
            host.redraw(self.store.len());
        }
        removed
    }

    pub fn edit_pattern(&mut self, id: RuleId, value: impl Into<String>) -> Result<(), RulesmithError> {
        self.rule_mut(id)?.pattern = value.into();
        Ok(())
    }

    pub fn edit_replacement(&mut self, id: RuleId, value: impl Into<String>) -> Result<(), RulesmithError> {
        self.rule_mut(id)?.replacement = value.into();
        Ok(())
    }

    /// Changes the category of a rule. Refused while the folder behavior is
    /// fixed, since every rule then targets titles.
    pub fn set_category<H: EditorHost + ?Sized>(
        &mut self,
        id: RuleId,
        category: RuleCategory,
        host: &mut H,
    ) -> Result<(), RulesmithError> {
        if self.behavior.locks_category() {
            return Err(RulesmithError::CategoryLocked);
        }
        self.rule_mut(id)?.category = category;
        host.redraw(self.store.len());
        Ok(())
    }

    /// Runs the save transaction over the session list. On rejection the
    /// sanitized fields stay in the session and the host is asked to redraw.
    pub fn validate_and_commit<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Result<PartitionedRules, RulesmithError> {
        let result = validate_and_commit(self.store.as_mut_slice(), host);
        if result.is_err() {
            host.redraw(self.store.len());
        }
        result
    }

    /// Commits and, on success, overwrites both lists of `upload`.
    pub fn commit_into<H: EditorHost + ?Sized>(&mut self, upload: &mut UploadSettings, host: &mut H) -> Result<(), RulesmithError> {
        let partitioned = self.validate_and_commit(host)?;
        partitioned.write_into(upload);
        info!(
            "Committed {} path rule(s) and {} title rule(s).",
            upload.replace_path.len(),
            upload.replace_title.len()
        );
        Ok(())
    }

    fn rule_mut(&mut self, id: RuleId) -> Result<&mut PathTitleRule, RulesmithError> {
        self.store.get_mut(id).ok_or(RulesmithError::RuleNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{CollectingHost, Notice};

    fn rule(pattern: &str, replacement: &str, category: RuleCategory) -> PathTitleRule {
        PathTitleRule::new(pattern, replacement, category)
    }

    #[test]
    fn lone_slash_pattern_fails_and_is_cleared() {
        let mut rules = vec![rule("/", "x", RuleCategory::Path)];
        let mut host = CollectingHost::new();

        let err = validate_and_commit(&mut rules, &mut host).unwrap_err();
        assert!(matches!(err, RulesmithError::ValidationFailed { forbidden: 1 }));
        assert_eq!(rules[0].pattern, "");
        assert_eq!(rules[0].replacement, "x");
        assert_eq!(host.forbidden_count(), 1);
    }

    #[test]
    fn ambiguous_replacement_warns_but_commits_unchanged() {
        let mut rules = vec![rule("foo", "bar/baz", RuleCategory::Path)];
        let mut host = CollectingHost::new();

        let committed = validate_and_commit(&mut rules, &mut host).unwrap();
        assert_eq!(committed.path, vec![rule("foo", "bar/baz", RuleCategory::Path)]);
        assert!(committed.title.is_empty());
        assert_eq!(host.notices, vec![Notice::AmbiguousPath { value: "bar/baz".into() }]);
    }

    #[test]
    fn every_rule_is_processed_before_failing() {
        let mut rules = vec![
            rule("a|b", "ok", RuleCategory::Title),
            rule("fine", "fine", RuleCategory::Path),
            rule("x", "?", RuleCategory::Path),
        ];
        let mut host = CollectingHost::new();

        let err = validate_and_commit(&mut rules, &mut host).unwrap_err();
        assert!(matches!(err, RulesmithError::ValidationFailed { forbidden: 2 }));
        assert_eq!(rules[0].pattern, "");
        assert_eq!(rules[0].replacement, "ok");
        assert_eq!(rules[1], rule("fine", "fine", RuleCategory::Path));
        assert_eq!(rules[2].replacement, "");
        assert_eq!(rules[2].pattern, "x");
    }

    #[test]
    fn notices_follow_rule_order_without_dedup() {
        let mut rules = vec![
            rule("/", "/", RuleCategory::Title),
            rule("/", "x", RuleCategory::Path),
        ];
        let mut host = CollectingHost::new();
        let _ = validate_and_commit(&mut rules, &mut host);

        let categories: Vec<_> = host
            .notices
            .iter()
            .map(|n| match n {
                Notice::Forbidden { category, .. } => *category,
                other => panic!("unexpected notice {other:?}"),
            })
            .collect();
        assert_eq!(categories, vec![RuleCategory::Title, RuleCategory::Title, RuleCategory::Path]);
    }

    #[test]
    fn pattern_notice_precedes_replacement_notice() {
        let mut rules = vec![
            rule("a|b", "c?d", RuleCategory::Title),
            rule("x/y", "a:b", RuleCategory::Path),
        ];
        let mut host = CollectingHost::new();
        let err = validate_and_commit(&mut rules, &mut host).unwrap_err();
        assert!(matches!(err, RulesmithError::ValidationFailed { forbidden: 3 }));

        assert_eq!(
            host.notices,
            vec![
                Notice::Forbidden { category: RuleCategory::Title, offending: "|".into() },
                Notice::Forbidden { category: RuleCategory::Title, offending: "?".into() },
                Notice::AmbiguousPath { value: "x/y".into() },
                Notice::Forbidden { category: RuleCategory::Path, offending: ":".into() },
            ]
        );
        assert_eq!(rules[1].pattern, "x/y");
        assert_eq!(rules[1].replacement, "");
    }

    #[test]
    fn success_partitions_by_category_preserving_order() {
        let mut rules = vec![
            rule("t1", "", RuleCategory::Title),
            rule("p1", "", RuleCategory::Path),
            rule("t2", "", RuleCategory::Title),
            rule("p2", "", RuleCategory::Path),
        ];
        let committed = validate_and_commit(&mut rules, &mut CollectingHost::new()).unwrap();
        let path: Vec<_> = committed.path.iter().map(|r| r.pattern.as_str()).collect();
        let title: Vec<_> = committed.title.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(path, vec!["p1", "p2"]);
        assert_eq!(title, vec!["t1", "t2"]);
    }

    #[test]
    fn category_is_locked_under_fixed_behavior() {
        let mut set = RegexRuleSet::new(FolderBehavior::Fixed);
        let mut host = CollectingHost::new();
        let id = set.add_rule(&mut host);

        let err = set.set_category(id, RuleCategory::Path, &mut host).unwrap_err();
        assert!(matches!(err, RulesmithError::CategoryLocked));
        assert_eq!(set.get(id).unwrap().category, RuleCategory::Title);
        assert_eq!(set.heading(), RuleSetHeading::TitlesOnly);
    }

    #[test]
    fn structural_mutations_trigger_redraws() {
        let mut set = RegexRuleSet::new(FolderBehavior::Obsidian);
        let mut host = CollectingHost::new();

        let id = set.add_rule(&mut host);
        set.set_category(id, RuleCategory::Path, &mut host).unwrap();
        set.edit_pattern(id, "drafts").unwrap();
        set.remove_by_identity(id, &mut host);
        set.remove_by_identity(id, &mut host);

        assert_eq!(host.redraws, 3);
        assert!(set.is_empty());
    }

    #[test]
    fn editing_a_removed_rule_reports_not_found() {
        let mut set = RegexRuleSet::new(FolderBehavior::Yaml);
        let mut host = CollectingHost::new();
        let id = set.add_rule(&mut host);
        set.remove_by_identity(id, &mut host);

        assert!(matches!(set.edit_replacement(id, "x"), Err(RulesmithError::RuleNotFound(missing)) if missing == id));
    }
}
