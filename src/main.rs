use std::sync::Arc;

use dreamhost_dns::auth::credentials::EnvCredentialManager;
use clap::Parser;
use dreamhost_dns::cli::{Cli, Command};
use dreamhost_dns::config::Config;
use dreamhost_dns::providers::dreamhost::{DreamhostConfig, DreamhostProvider};
use dreamhost_dns::{CachedClient, DNSRecord, DNSRecordResource, Error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_record(record: &DNSRecord) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        record.zone, record.record, record.record_type, record.value, record.comment
    );
}

async fn run(command: Command) -> Result<(), Error> {
    let config = Config::from_env();
    let provider = DreamhostProvider::new(
        DreamhostConfig::from(&config),
        Arc::new(EnvCredentialManager),
    )
    .map_err(dreamhost_dns::providers::dreamhost::error::map_error)?;

    // One client per run so every resource operation shares the snapshot.
    let client = Arc::new(CachedClient::new(Arc::new(provider)));
    let resource = DNSRecordResource::new(client.clone());
    info!(provider = client.provider_name(), "Client ready");

    match command {
        Command::List => client.list().await?.iter().for_each(print_record),
        Command::Lookup { record, no_cache } => match client.lookup(&record.to_input(), !no_cache).await? {
            Some(record) => print_record(&record),
            None => println!("not found"),
        },
        Command::Create { record, comment } => {
            let mut input = record.to_input();
            if let Some(comment) = comment {
                input = input.with_comment(comment);
            }
            println!("{}", resource.create(&input).await?.id)
        }
        Command::Read { id } => match resource.read(&id).await? {
            Some(state) => print_record(&state.record),
            None => println!("not found"),
        },
        Command::Delete { id } => resource.delete(&id).await?,
        Command::Import { id } => print_record(&resource.import(&id).await?.record),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        error!(error = %e, "Command failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
