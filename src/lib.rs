//! teoctl - Explore and clean up TencentCloud EdgeOne (TEO) resources
//!
//! A CLI tool to look up and delete TEO resources: zones, DNS records,
//! load balancers, origin groups, rule engine entries, and application
//! proxies.
//!
//! # Example
//!
//! ```bash
//! # Show a zone
//! teoctl get zone zone-2a3b4c5d
//!
//! # Show several zones at once
//! teoctl get zone zone-2a3b4c5d zone-6e7f8a9b
//!
//! # Find a DNS record by name
//! teoctl get dns-record www.example.com
//!
//! # Show a load balancer as JSON
//! teoctl get lb lb-6e7f8a9b --zone-id zone-2a3b4c5d -o json
//!
//! # Delete a rule without the confirmation prompt
//! teoctl delete rule rule-9c8d7e6f --zone-id zone-2a3b4c5d -y
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod teo;
pub mod ui;

pub use cli::{Cli, Command, DeleteResource, GetResource, OutputFormat};
pub use error::{Result, TeoError};
pub use output::{
    output_application_proxies, output_dns_records, output_load_balancing, output_origin_groups,
    output_raw, output_rules, output_zones,
};
pub use teo::{
    run_app_proxy_command, run_delete_app_proxy_command, run_delete_dns_record_command,
    run_delete_lb_command, run_delete_origin_group_command, run_delete_rule_command,
    run_delete_zone_command, run_dns_record_command, run_lb_command, run_origin_group_command,
    run_rule_command, run_zone_command, ApplicationProxy, CredentialResolver, Credentials,
    DnsRecord, LoadBalancing, OriginGroup, RuleSetting, TeoClient, Zone,
};
