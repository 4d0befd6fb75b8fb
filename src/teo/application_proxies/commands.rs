//! Application proxy command handlers

use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::output::{output_application_proxies, output_raw};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get app-proxy command
pub async fn run_app_proxy_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::AppProxy(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching application proxy '{}'...", args.id),
        cli.batch,
    );

    match client
        .describe_application_proxy(&args.zone_id, &args.id)
        .await
    {
        Ok((proxy, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&raw, &args.output);
                return Ok(());
            }
            output_application_proxies(&[proxy]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}

/// Run the delete app-proxy command
pub async fn run_delete_app_proxy_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::AppProxy(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Delete application proxy '{}' from zone '{}'?",
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
        &format!("Deleting application proxy '{}'...", args.id),
        cli.batch,
    );
    match client
        .delete_application_proxy(&args.zone_id, &args.id)
        .await
    {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted application proxy {}", args.id);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
