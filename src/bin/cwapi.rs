//! ConnectWise API CLI binary.
//!
//! A command-line interface for reading ConnectWise resources.

use std::process::ExitCode;

use clap::Parser;
use cwapi::cli::{Cli, Command, Filters};
use cwapi::{
    pretty_print, render_table, Capabilities, ConnectWiseClient, Endpoint, PageMethod,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match ConnectWiseClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set CONNECTWISE_COMPANY_ID, CONNECTWISE_PUBLIC_KEY, \
                 CONNECTWISE_PRIVATE_KEY and CONNECTWISE_CLIENT_ID"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &ConnectWiseClient, cli: Cli) -> cwapi::Result<()> {
    match cli.command {
        Command::Get { path, filters } => handle_get(client, &path, &filters, cli.json).await,
        Command::List {
            path,
            page,
            page_size,
            all,
            search,
            columns,
            filters,
        } => {
            let paging = if search {
                PageMethod::Search
            } else {
                PageMethod::Query
            };
            let endpoint: Endpoint<Value> = client.endpoint(
                &path,
                Capabilities {
                    paginate: Some(paging),
                    ..Capabilities::ALL
                },
            );
            handle_list(&endpoint, page, page_size, all, &columns, &filters, cli.json).await
        }
        Command::Count { path, filters } => {
            let endpoint: Endpoint<Value> = client.endpoint(&path, Capabilities::ALL);
            let count = endpoint.count(&filters.to_params()).await?;
            println!("{count}");
            Ok(())
        }
    }
}

async fn handle_get(
    client: &ConnectWiseClient,
    path: &str,
    filters: &Filters,
    json: bool,
) -> cwapi::Result<()> {
    let endpoint: Endpoint<Value> = client.endpoint(path, Capabilities::ALL);
    let record = endpoint.get_one(&filters.to_params()).await?;

    if json || !record.is_object() {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", pretty_print(&record));
    }
    Ok(())
}

async fn handle_list(
    endpoint: &Endpoint<Value>,
    page: u32,
    page_size: u32,
    all: bool,
    columns: &[String],
    filters: &Filters,
    json: bool,
) -> cwapi::Result<()> {
    let mut seq = endpoint.paginated(page, page_size, &filters.to_params()).await?;
    let records = if all {
        seq.collect_all().await?
    } else {
        seq.advance().await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{}", render_table(&records, columns));
    if all {
        println!("\n{} records, through page {}", records.len(), seq.current_page_index());
    } else if seq.is_exhausted() {
        println!("\nPage {} (end)", seq.current_page_index());
    } else {
        println!("\nPage {} (more available)", seq.current_page_index());
    }
    Ok(())
}
