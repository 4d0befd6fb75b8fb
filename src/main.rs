//! teoctl - Main entry point

use clap::Parser;
use log::{debug, info};

use teoctl::{Cli, Command, CredentialResolver, DeleteResource, GetResource, TeoClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting teoctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve credentials with fallback logic
    let credentials =
        CredentialResolver::resolve(cli.secret_id.as_deref(), cli.secret_key.as_deref())?;
    let region = CredentialResolver::resolve_region(cli.region.as_deref());
    debug!("Region: {:?}, batch: {}", region, cli.batch);

    let mut client = TeoClient::new(credentials, region);
    client.set_batch_mode(cli.batch);
    client.set_endpoint(cli.endpoint.clone());

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Zone(_) => teoctl::run_zone_command(&client, cli).await,
            GetResource::DnsRecord(_) => teoctl::run_dns_record_command(&client, cli).await,
            GetResource::Lb(_) => teoctl::run_lb_command(&client, cli).await,
            GetResource::OriginGroup(_) => teoctl::run_origin_group_command(&client, cli).await,
            GetResource::Rule(_) => teoctl::run_rule_command(&client, cli).await,
            GetResource::AppProxy(_) => teoctl::run_app_proxy_command(&client, cli).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Zone(_) => teoctl::run_delete_zone_command(&client, cli).await,
            DeleteResource::DnsRecord(_) => {
                teoctl::run_delete_dns_record_command(&client, cli).await
            }
            DeleteResource::Lb(_) => teoctl::run_delete_lb_command(&client, cli).await,
            DeleteResource::OriginGroup(_) => {
                teoctl::run_delete_origin_group_command(&client, cli).await
            }
            DeleteResource::Rule(_) => teoctl::run_delete_rule_command(&client, cli).await,
            DeleteResource::AppProxy(_) => {
                teoctl::run_delete_app_proxy_command(&client, cli).await
            }
        },
    }
}
