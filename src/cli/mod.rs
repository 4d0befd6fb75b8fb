//! CLI argument parsing

mod common;
mod delete;
mod get;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use delete::{
    DeleteAppProxyArgs, DeleteDnsRecordArgs, DeleteLbArgs, DeleteOriginGroupArgs, DeleteResource,
    DeleteRuleArgs, DeleteZoneArgs,
};
pub use get::{
    AppProxyArgs, DnsRecordArgs, GetResource, LbArgs, OriginGroupArgs, RuleArgs, ZoneArgs,
};

/// TencentCloud EdgeOne (TEO) CLI
#[derive(Parser, Debug)]
#[command(name = "teoctl")]
#[command(version)]
#[command(about = "Explore and clean up TencentCloud EdgeOne resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Secret ID (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub secret_id: Option<String>,

    /// Secret key (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub secret_key: Option<String>,

    /// Region sent with each request (e.g. ap-guangzhou)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// API endpoint override (defaults to https://teo.tencentcloudapi.com)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no confirmation prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch resource details
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Delete resources
    #[command(visible_alias = "del", visible_alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}
