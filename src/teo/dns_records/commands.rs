//! DNS record command handlers

use dialoguer::Confirm;

use crate::cli::OutputFormat;
use crate::output::{output_dns_records, output_raw};
use crate::teo::TeoClient;
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, DeleteResource, GetResource};

/// Run the get dns-record command
pub async fn run_dns_record_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::DnsRecord(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Searching for DNS record '{}'...", args.name),
        cli.batch,
    );

    match client.describe_dns_record(&args.name).await {
        Ok(Some((record, raw))) => {
            finish_spinner(spinner, "Found");
            if matches!(args.output, OutputFormat::Json | OutputFormat::Yaml) {
                output_raw(&raw, &args.output);
                return Ok(());
            }
            output_dns_records(&[record]);
            Ok(())
        }
        Ok(None) => {
            finish_spinner(spinner, "Not found");
            Err(format!("DNS record '{}' not found", args.name).into())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}

/// Run the delete dns-record command
pub async fn run_delete_dns_record_command(
    client: &TeoClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::DnsRecord(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if !args.yes && !cli.batch {
        let prompt = if let [id] = args.ids.as_slice() {
            format!("Delete DNS record '{}'?", id)
        } else {
            format!("Delete {} DNS records?", args.ids.len())
        };
        let confirm = Confirm::new().with_prompt(prompt).default(false).interact()?;
        if !confirm {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(
        &format!("Deleting {} DNS record(s)...", args.ids.len()),
        cli.batch,
    );
    match client.delete_dns_records(&args.ids).await {
        Ok(()) => {
            finish_spinner(spinner, "Deleted");
            println!("✓ Deleted {} DNS record(s)", args.ids.len());
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e.into())
        }
    }
}
