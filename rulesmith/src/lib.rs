// rulesmith/src/lib.rs
//! # rulesmith CLI
//!
//! Terminal host for `rulesmith-core`: loads the settings file, drives one
//! editing session per command, prints validation notices as they are raised
//! and writes the settings back only when the save transaction succeeds.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
