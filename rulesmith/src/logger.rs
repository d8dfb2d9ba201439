//! Logger setup for the `rulesmith` binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`, honoring `RUST_LOG` unless `level_override` is set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    // Notices are already printed by the terminal host, so the core's
    // warn-level logs stay hidden by default.
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
