//! Rule engine command handlers

use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::output::{output_raw, output_rules};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get rule command
pub async fn run_rule_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Rule(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(&format!("Searching for rule '{}'...", args.id), cli.batch);

    match client.describe_rule(&args.zone_id, &args.id).await {
        Ok(Some((rule, raw))) => {
            finish_spinner(spinner, "Found");
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&raw, &args.output);
                return Ok(());
            }
            output_rules(&[rule]);
            Ok(())
        }
        Ok(None) => {
            finish_spinner(spinner, "Not found");
            Err(format!("Rule '{}' not found in zone '{}'", args.id, args.zone_id).into())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}

/// Run the delete rule command
pub async fn run_delete_rule_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Rule(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Delete rule '{}' from zone '{}'?",
                args.id, args.zone_id
            ))
            .default(false)
            .interact()?;
        if !confirm {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(&format!("Deleting rule '{}'...", args.id), cli.batch);
    match client.delete_rule(&args.zone_id, &args.id).await {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted rule {}", args.id);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
