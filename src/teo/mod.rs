//! TEO API client module
//!
//! This module provides functionality to interact with the TencentCloud
//! EdgeOne (TEO) API.

pub mod application_proxies;
mod auth;
mod client;
mod credentials;
pub mod dns_records;
pub mod load_balancing;
pub mod origin_groups;
mod ratelimit;
pub mod rule_engine;
pub mod zones;

pub use application_proxies::{
    run_app_proxy_command, run_delete_app_proxy_command, ApplicationProxy,
};
pub use client::TeoClient;
pub use credentials::{CredentialResolver, Credentials};
pub use dns_records::{run_delete_dns_record_command, run_dns_record_command, DnsRecord};
pub use load_balancing::{run_delete_lb_command, run_lb_command, LoadBalancing};
pub use origin_groups::{run_delete_origin_group_command, run_origin_group_command, OriginGroup};
pub use ratelimit::ActionLimiter;
pub use rule_engine::{run_delete_rule_command, run_rule_command, RuleSetting};
pub use zones::{run_delete_zone_command, run_zone_command, Zone};
