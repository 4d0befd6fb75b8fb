//! Load balancing command handlers

use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::output::{output_load_balancing, output_raw};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get lb command
pub async fn run_lb_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Lb(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching load balancer '{}'...", args.id),
        cli.batch,
    );

    match client.describe_load_balancing(&args.zone_id, &args.id).await {
        Ok((lb, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&raw, &args.output);
                return Ok(());
            }
            output_load_balancing(&[lb]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}

/// Run the delete lb command
pub async fn run_delete_lb_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Lb(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Delete load balancer '{}' from zone '{}'?",
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
        &format!("Deleting load balancer '{}'...", args.id),
        cli.batch,
    );
    match client.delete_load_balancing(&args.zone_id, &args.id).await {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted load balancer {}", args.id);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
