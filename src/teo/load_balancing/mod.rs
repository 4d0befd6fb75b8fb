//! Load balancing module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_lb_command, run_lb_command};
pub use models::LoadBalancing;
