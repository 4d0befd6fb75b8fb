//! Origin group module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_origin_group_command, run_origin_group_command};
pub use models::{OriginGroup, OriginRecord};
