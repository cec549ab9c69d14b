use std::path::PathBuf;

use clap::Parser;
use uuid::Uuid;

use onerror::config::{load_config, OnErrorConfig};
use onerror::{observability, HttpResponse, RemoteResponse};

#[derive(Parser)]
#[command(name = "http-probe")]
#[command(about = "Fetch a URL and report failures with structured context", long_about = None)]
struct Cli {
    /// URL to fetch.
    url: String,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request ID attached to every record (generated when omitted).
    #[arg(long)]
    request_id: Option<String>,

    /// Leave the response body open after reporting a failure status.
    #[arg(long)]
    keep_body: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => OnErrorConfig::default(),
    };
    observability::init(&config)?;

    let request_id = cli
        .request_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let entry = onerror::global()
        .with_field("request_id", request_id)
        .with_field("url", cli.url.as_str());

    tracing::info!(url = %cli.url, "Probing");

    match reqwest::get(&cli.url).await {
        Ok(response) => {
            let mut response = RemoteResponse::from(response);
            let status = response.status();
            entry
                .log_http(None::<reqwest::Error>, Some(&mut response), cli.keep_body)
                .await?;
            println!("{}", status);
        }
        Err(e) => {
            entry
                .log_http(Some(e), None::<&mut RemoteResponse>, false)
                .await?;
        }
    }

    Ok(())
}
