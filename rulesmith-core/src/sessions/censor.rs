// rulesmith-core/src/sessions/censor.rs
//! Editing session for content censor rules.
//!
//! Body text is unconstrained, so there is no validator here and commits
//! always succeed.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::config::{CensorPhase, CensorRule, ConversionSettings};
use crate::errors::RulesmithError;
use crate::notice::EditorHost;
use crate::store::{RuleId, RuleStore};

#[derive(Debug, Clone, Default)]
pub struct ContentCensorSet {
    store: RuleStore<CensorRule>,
}

impl ContentCensorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(conversion: &ConversionSettings) -> Self {
        debug!("Loaded {} censor rule(s) into the session.", conversion.censor_text.len());
        Self {
            store: RuleStore::from_rules(conversion.censor_text.iter().cloned()),
        }
    }

    pub fn rules(&self) -> &[CensorRule] {
        self.store.as_slice()
    }

    pub fn id_at(&self, index: usize) -> Option<RuleId> {
        self.store.id_at(index)
    }

    pub fn get(&self, id: RuleId) -> Option<&CensorRule> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Appends an empty rule applied before the conversion.
    pub fn add_rule<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> RuleId {
        let id = self.store.append(CensorRule::default());
        host.redraw(self.store.len());
        id
    }

    pub fn remove_by_identity<H: EditorHost + ?Sized>(&mut self, id: RuleId, host: &mut H) -> Option<CensorRule> {
        let removed = self.store.remove_by_identity(id);
        if removed.is_some() {
            host.redraw(self.store.len());
        }
        removed
    }

    /// Flips the phase of a rule between before and after the conversion.
    pub fn toggle_phase<H: EditorHost + ?Sized>(&mut self, id: RuleId, host: &mut H) -> Result<CensorPhase, RulesmithError> {
        let rule = self.rule_mut(id)?;
        rule.phase = rule.phase.toggled();
        let phase = rule.phase;
        debug!("Censor rule {} now runs {} the conversion.", id, phase);
        host.redraw(self.store.len());
        Ok(phase)
    }

    pub fn edit_pattern(&mut self, id: RuleId, value: impl Into<String>) -> Result<(), RulesmithError> {
        self.rule_mut(id)?.pattern = value.into();
        Ok(())
    }

    pub fn edit_replacement(&mut self, id: RuleId, value: impl Into<String>) -> Result<(), RulesmithError> {
        self.rule_mut(id)?.replacement = value.into();
        Ok(())
    }

    /// The flat ordered list to persist.
    pub fn commit(&self) -> Vec<CensorRule> {
        self.store.to_ordered_list()
    }

    pub fn commit_into(&self, conversion: &mut ConversionSettings) {
        conversion.censor_text = self.commit();
        info!("Committed {} censor rule(s).", conversion.censor_text.len());
    }

    fn rule_mut(&mut self, id: RuleId) -> Result<&mut CensorRule, RulesmithError> {
        self.store.get_mut(id).ok_or(RulesmithError::RuleNotFound(id))
    }
}
