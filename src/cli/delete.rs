//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a zone
    #[command(visible_alias = "zones")]
    Zone(DeleteZoneArgs),

    /// Delete DNS records by ID
    #[command(visible_alias = "dns-records", visible_alias = "dns")]
    DnsRecord(DeleteDnsRecordArgs),

    /// Delete a load balancer
    #[command(visible_alias = "load-balancing", visible_alias = "load-balancer")]
    Lb(DeleteLbArgs),

    /// Delete an origin group
    #[command(visible_alias = "origin-groups", visible_alias = "og")]
    OriginGroup(DeleteOriginGroupArgs),

    /// Delete a rule engine entry
    #[command(visible_alias = "rules")]
    Rule(DeleteRuleArgs),

    /// Delete an application proxy
    #[command(
        visible_alias = "application-proxy",
        visible_alias = "app-proxies",
        visible_alias = "proxy"
    )]
    AppProxy(DeleteAppProxyArgs),
}

/// Arguments for 'delete zone' subcommand
#[derive(Parser, Debug)]
pub struct DeleteZoneArgs {
    /// Zone ID (zone-xxx)
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete dns-record' subcommand
#[derive(Parser, Debug)]
pub struct DeleteDnsRecordArgs {
    /// Record IDs (record-xxx), several may be given
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete lb' subcommand
#[derive(Parser, Debug)]
pub struct DeleteLbArgs {
    /// Load balancer ID (lb-xxx)
    pub id: String,

    /// Zone ID the load balancer belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete origin-group' subcommand
#[derive(Parser, Debug)]
pub struct DeleteOriginGroupArgs {
    /// Origin group ID (origin-xxx)
    pub id: String,

    /// Zone ID the origin group belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete rule' subcommand
#[derive(Parser, Debug)]
pub struct DeleteRuleArgs {
    /// Rule ID (rule-xxx)
    pub id: String,

    /// Zone ID the rule belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete app-proxy' subcommand
#[derive(Parser, Debug)]
pub struct DeleteAppProxyArgs {
    /// Application proxy ID (proxy-xxx)
    pub id: String,

    /// Zone ID the proxy belongs to
    #[arg(long = "zone-id")]
    pub zone_id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
