//! Application proxy module

mod api;
mod commands;
mod models;

pub use commands::{run_app_proxy_command, run_delete_app_proxy_command};
pub use models::ApplicationProxy;
