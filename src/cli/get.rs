//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get zone details by ID
    #[command(visible_alias = "zones")]
    Zone(ZoneArgs),

    /// Find a DNS record by name
    #[command(visible_alias = "dns-records", visible_alias = "dns")]
    DnsRecord(DnsRecordArgs),

    /// Get load balancer details
    #[command(visible_alias = "load-balancing", visible_alias = "load-balancer")]
    Lb(LbArgs),

    /// Get origin group details
    #[command(visible_alias = "origin-groups", visible_alias = "og")]
    OriginGroup(OriginGroupArgs),

    /// Get a rule engine entry
    #[command(visible_alias = "rules")]
    Rule(RuleArgs),

    /// Get application proxy details
    #[command(
        visible_alias = "application-proxy",
        visible_alias = "app-proxies",
        visible_alias = "proxy"
    )]
    AppProxy(AppProxyArgs),
}

/// Arguments for 'get zone' subcommand
#[derive(Parser, Debug)]
pub struct ZoneArgs {
    /// Zone IDs (zone-xxx), several may be given
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get dns-record' subcommand
#[derive(Parser, Debug)]
pub struct DnsRecordArgs {
    /// Record name to search for (e.g. www.example.com)
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get lb' subcommand
#[derive(Parser, Debug)]
pub struct LbArgs {
    /// Load balancer ID (lb-xxx)
    pub id: String,

    /// Zone ID the load balancer belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get origin-group' subcommand
#[derive(Parser, Debug)]
pub struct OriginGroupArgs {
    /// Origin group ID (origin-xxx)
    pub id: String,

    /// Zone ID the origin group belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get rule' subcommand
#[derive(Parser, Debug)]
pub struct RuleArgs {
    /// Rule ID (rule-xxx)
    pub id: String,

    /// Zone ID the rule belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get app-proxy' subcommand
#[derive(Parser, Debug)]
pub struct AppProxyArgs {
    /// Application proxy ID (proxy-xxx)
    pub id: String,

    /// Zone ID the proxy belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
