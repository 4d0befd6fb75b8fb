//! Zone module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_zone_command, run_zone_command};
pub use models::Zone;
