//! Zone command handlers

use dialoguer::Confirm;
use log::info;

use crate::cli::OutputFormat;
use crate::output::{output_raw, output_zones};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get zone command
pub async fn run_zone_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Zone(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let [zone_id] = args.ids.as_slice() {
        let spinner = create_spinner(&format!("Fetching zone '{}'...", zone_id), cli.batch);
        return match client.describe_zone(zone_id).await {
            Ok((zone, raw)) => {
                finish_spinner(spinner, "Found");
                if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                    output_raw(&raw, &args.output);
                    return Ok(());
                }
                output_zones(&[zone]);
                Ok(())
            }
            Err(e) => {
                finish_spinner(spinner, "Error");
                Err(e.into())
            }
        };
    }

    let spinner = create_spinner(&format!("Fetching {} zones...", args.ids.len()), cli.batch);
    let results = client.describe_zones_by_ids(&args.ids).await;
    finish_spinner(spinner, "Done");

    let mut zones = Vec::new();
    let mut raws = Vec::new();
    let mut had_errors = false;
    for (zone_id, result) in results {
        match result {
            Ok((zone, raw)) => {
                zones.push(zone);
                raws.push(raw);
            }
            Err(e) => {
                eprintln!("Error fetching zone '{}': {}", zone_id, e);
                had_errors = true;
            }
        }
    }

    if zones.is_empty() {
        return Err("No zones could be fetched".into());
    }

    if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
        output_raw(&serde_json::Value::Array(raws), &args.output);
    } else {
        output_zones(&zones);
    }

    if had_errors {
        info!("Completed with some errors");
    }
    Ok(())
}

/// Run the delete zone command
pub async fn run_delete_zone_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Zone(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete zone '{}'?", args.id))
            .default(false)
            .interact()?;
        if !confirm {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(&format!("Deleting zone '{}'...", args.id), cli.batch);
    match client.delete_zone(&args.id).await {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted zone {}", args.id);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
