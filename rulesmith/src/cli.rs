//! This file defines the command-line interface (CLI) for the rulesmith
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use rulesmith_core::{FolderBehavior, RuleCategory};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rulesmith",
    version = env!("CARGO_PKG_VERSION"),
    about = "Edit and validate publishing replacement rules",
    long_about = "rulesmith manages the find/replace rules applied to folder paths, file titles and document bodies when publishing notes. Path and title rules are checked against filename constraints before anything is saved.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Settings file holding the rules.
    #[arg(
        long = "settings",
        value_name = "FILE",
        env = "RULESMITH_SETTINGS",
        global = true,
        help = "Settings file to read and update (defaults to the user config directory)."
    )]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies a single value as it would be checked on save.
    #[command(about = "Check one pattern or replacement value against the filename policy.")]
    Classify(ClassifyCommand),

    /// Validates the stored path/title rules without writing anything.
    #[command(about = "Validate every stored path/title rule without saving.")]
    Check,

    /// Path and title replacement rules.
    #[command(subcommand, about = "Edit path and title replacement rules.")]
    Rules(RulesCommand),

    /// Content censor rules.
    #[command(subcommand, about = "Edit content censor rules.")]
    Censor(CensorCommand),
}

#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// The value to classify.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Which kind of name the value ends up in.
    #[arg(long, short = 'c', value_enum, default_value = "title")]
    pub category: CategoryArg,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    #[command(about = "List path/title rules in order.")]
    List {
        #[arg(long, help = "Print the rules as JSON.")]
        json: bool,
    },
    #[command(about = "Append a rule and save.")]
    Add {
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        pattern: String,
        #[arg(long, short = 'r', default_value = "", allow_hyphen_values = true)]
        replacement: String,
        #[arg(long, short = 'c', value_enum, help = "Rule category (new rules target titles).")]
        category: Option<CategoryArg>,
    },
    #[command(about = "Remove the rule at POSITION and save.")]
    Remove {
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    #[command(about = "Change the pattern and/or replacement of the rule at POSITION and save.")]
    Edit {
        #[arg(value_name = "POSITION")]
        position: usize,
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        pattern: Option<String>,
        #[arg(long, short = 'r', allow_hyphen_values = true)]
        replacement: Option<String>,
    },
    #[command(about = "Move the rule at POSITION to another category and save.")]
    SetCategory {
        #[arg(value_name = "POSITION")]
        position: usize,
        #[arg(value_enum)]
        category: CategoryArg,
    },
    #[command(about = "Choose how output folders are picked. Folder rules need 'yaml' or 'obsidian'.")]
    Behavior {
        #[arg(value_enum)]
        behavior: BehaviorArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum CensorCommand {
    #[command(about = "List content censor rules in order.")]
    List {
        #[arg(long, help = "Print the rules as JSON.")]
        json: bool,
    },
    #[command(about = "Append a censor rule and save.")]
    Add {
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        pattern: String,
        #[arg(long, short = 'r', default_value = "", allow_hyphen_values = true)]
        replacement: String,
        #[arg(long, help = "Apply the rule after the conversion instead of before.")]
        after: bool,
    },
    #[command(about = "Remove the censor rule at POSITION and save.")]
    Remove {
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    #[command(about = "Change the pattern and/or replacement of the censor rule at POSITION and save.")]
    Edit {
        #[arg(value_name = "POSITION")]
        position: usize,
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        pattern: Option<String>,
        #[arg(long, short = 'r', allow_hyphen_values = true)]
        replacement: Option<String>,
    },
    #[command(about = "Flip the censor rule at POSITION between before and after the conversion, and save.")]
    Toggle {
        #[arg(value_name = "POSITION")]
        position: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// A folder segment.
    Path,
    /// A file title.
    Title,
}

impl From<CategoryArg> for RuleCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Path => RuleCategory::Path,
            CategoryArg::Title => RuleCategory::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BehaviorArg {
    /// One fixed output folder; only titles are rewritten.
    Fixed,
    /// Folder taken from a frontmatter key.
    Yaml,
    /// Folder mirrors the vault structure.
    Obsidian,
}

impl From<BehaviorArg> for FolderBehavior {
    fn from(arg: BehaviorArg) -> Self {
        match arg {
            BehaviorArg::Fixed => FolderBehavior::Fixed,
            BehaviorArg::Yaml => FolderBehavior::Yaml,
            BehaviorArg::Obsidian => FolderBehavior::Obsidian,
        }
    }
}
