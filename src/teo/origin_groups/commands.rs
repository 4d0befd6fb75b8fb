//! Origin group command handlers

use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::output::{output_origin_groups, output_raw};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get origin-group command
pub async fn run_origin_group_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::OriginGroup(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching origin group '{}'...", args.id),
        cli.batch,
    );

    match client.describe_origin_group(&args.zone_id, &args.id).await {
        Ok((group, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&raw, &args.output);
                return Ok(());
            }
            output_origin_groups(&[group]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}

/// Run the delete origin-group command
pub async fn run_delete_origin_group_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::OriginGroup(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Delete origin group '{}' from zone '{}'?",
                args.id, args.zone_id
            ))
            .default(false)
            .interact()?;
        if !confirm {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(
        &format!("Deleting origin group '{}'...", args.id),
        cli.batch,
    );
    match client.delete_origin_group(&args.zone_id, &args.id).await {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted origin group {}", args.id);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
