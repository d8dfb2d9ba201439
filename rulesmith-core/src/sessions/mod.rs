//! Editing sessions over the two rule collections.
//!
//! Each session owns its rule list for the duration of one edit, applies
//! mutations one at a time, and hands back the list to persist on commit.
//!
//! * `regex_rules`: path/title rules, validated on commit.
//! * `censor`: content censor rules, never validated.

pub mod censor;
pub mod regex_rules;
