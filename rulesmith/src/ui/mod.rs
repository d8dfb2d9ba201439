//! Terminal presentation: theme, message formatting, rule listings, and the
//! host that receives validation notices.

pub mod output_format;
pub mod rule_table;
pub mod terminal_host;
pub mod theme;
