//! DNS record module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_dns_record_command, run_dns_record_command};
pub use models::DnsRecord;
