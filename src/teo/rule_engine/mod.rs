//! Rule engine module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_rule_command, run_rule_command};
pub use models::RuleSetting;
