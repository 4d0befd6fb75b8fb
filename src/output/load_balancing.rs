//! Load balancing output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::LoadBalancing;

/// Output load balancers as a table
pub fn output_load_balancing(load_balancers: &[LoadBalancing]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Host", "ID", "Type", "TTL", "Status", "CNAME", "Updated"]);

    for lb in load_balancers {
        let ttl = lb.ttl().to_string();
        table.add_row(vec![
            lb.host(),
            lb.id(),
            lb.lb_type(),
            &ttl,
            lb.status(),
            lb.cname(),
            lb.update_time.as_deref().unwrap_or(""),
        ]);
    }

    println!();
    println!("{table}");
}
