//! Rule engine output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::teo::RuleSetting;

/// Output rule engine entries as a table
pub fn output_rules(rules: &[RuleSetting]) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Name", "ID", "Status", "Branches"]);

    for rule in rules {
        let branches = rule.branch_count().to_string();
        table.add_row(vec![rule.name(), rule.id(), rule.status(), &branches]);
    }

    println!();
    println!("{table}");
}
