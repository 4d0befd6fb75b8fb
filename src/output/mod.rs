//! Output formatting module
//!
//! Table rendering for each resource kind, plus raw JSON/YAML passthrough
//! of API responses.

mod application_proxies;
mod common;
mod dns_records;
mod load_balancing;
mod origin_groups;
mod rule_engine;
mod zones;

pub use application_proxies::output_application_proxies;
pub use common::output_raw;
pub use dns_records::output_dns_records;
pub use load_balancing::output_load_balancing;
pub use origin_groups::output_origin_groups;
pub use rule_engine::output_rules;
pub use zones::output_zones;
