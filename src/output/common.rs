//! Common utilities for output formatters

use log::error;

use crate::cli::OutputFormat;

/// Print a raw API response as JSON or YAML
pub fn output_raw(raw: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(raw) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize response as JSON: {}", e),
        },
        OutputFormat::Yaml => match serde_yml::to_string(raw) {
            Ok(yaml) => println!("{}", yaml),
            Err(e) => error!("Failed to serialize response as YAML: {}", e),
        },
        OutputFormat::Table => unreachable!("output_raw is only called for JSON/YAML formats"),
    }
}
