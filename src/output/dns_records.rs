//! DNS record output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::DnsRecord;

/// Output DNS records as a table
pub fn output_dns_records(records: &[DnsRecord]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Name", "ID", "Type", "Content", "Mode", "TTL", "Status", "Locked",
    ]);

    for record in records {
        let ttl = record.ttl().to_string();
        let locked = if record.locked() { "Yes" } else { "No" };
        table.add_row(vec![
            record.name(),
            record.id(),
            record.record_type(),
            record.content(),
            record.mode(),
            &ttl,
            record.status(),
            locked,
        ]);
    }

    println!();
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> DnsRecord {
        DnsRecord {
            id: Some("record-1a2b".to_string()),
            record_type: Some("A".to_string()),
            name: Some("www.example.com".to_string()),
            content: Some("203.0.113.10".to_string()),
            mode: Some("proxied".to_string()),
            ttl: Some(300),
            priority: None,
            zone_id: Some("zone-2a3b4c5d".to_string()),
            zone_name: Some("example.com".to_string()),
            status: Some("active".to_string()),
            cname: None,
            locked: Some(false),
        }
    }

    #[test]
    fn test_output_dns_records_empty() {
        // Should not panic with empty input
        output_dns_records(&[]);
    }

    #[test]
    fn test_output_dns_records() {
        // Should not panic
        output_dns_records(&[create_test_record()]);
    }
}
