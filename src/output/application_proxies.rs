//! Application proxy output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::ApplicationProxy;

/// Output application proxies as a table
pub fn output_application_proxies(proxies: &[ApplicationProxy]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Name",
        "ID",
        "Type",
        "Platform",
        "Security",
        "Acceleration",
        "Status",
        "Schedule",
    ]);

    for proxy in proxies {
        let security = if proxy.security_enabled() { "On" } else { "Off" };
        let acceleration = if proxy.accelerate_enabled() { "On" } else { "Off" };
        let schedule = proxy.schedule_value_joined();
        table.add_row(vec![
            proxy.name(),
            proxy.id(),
            proxy.proxy_type(),
            proxy.plat_type(),
            security,
            acceleration,
            proxy.status(),
            &schedule,
        ]);
    }

    println!();
    println!("{table}");
}
