//! Zone output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::Zone;

/// Output zones as a table
pub fn output_zones(zones: &[Zone]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Name",
        "ID",
        "Status",
        "Type",
        "Paused",
        "CNAME Status",
        "Name Servers",
    ]);

    for zone in zones {
        let paused = if zone.paused() { "Yes" } else { "No" };
        let name_servers = zone.name_servers_joined();
        table.add_row(vec![
            zone.name(),
            &zone.id,
            zone.status(),
            zone.zone_type(),
            paused,
            zone.cname_status(),
            &name_servers,
        ]);
    }

    println!();
    println!("{table}");
    println!("\nTotal: {} zones", zones.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_zone() -> Zone {
        Zone {
            id: "zone-2a3b4c5d".to_string(),
            name: Some("example.com".to_string()),
            status: Some("active".to_string()),
            zone_type: Some("full".to_string()),
            paused: Some(false),
            created_on: Some("2022-05-01T08:00:00Z".to_string()),
            modified_on: None,
            cname_status: Some("finished".to_string()),
            area: None,
            name_servers: Some(vec!["ns1.teodns.com".to_string()]),
            original_name_servers: None,
        }
    }

    #[test]
    fn test_output_zones_empty() {
        // Should not panic with empty input
        output_zones(&[]);
    }

    #[test]
    fn test_output_zones() {
        // Should not panic
        output_zones(&[create_test_zone()]);
    }
}
