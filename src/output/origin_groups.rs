//! Origin group output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::OriginGroup;

/// Output origin groups as a table
pub fn output_origin_groups(groups: &[OriginGroup]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Name",
        "ID",
        "Type",
        "Origin Type",
        "Records",
        "In Use",
        "Updated",
    ]);

    for group in groups {
        let records = group.record_count().to_string();
        let in_use = if group.in_use() { "Yes" } else { "No" };
        table.add_row(vec![
            group.name(),
            group.id(),
            group.group_type(),
            group.origin_type(),
            &records,
            in_use,
            group.update_time(),
        ]);
    }

    println!();
    println!("{table}");
}
