use anyhow::Result;
use clap::Parser;
use std::process;

use dnstrails::config::API_KEY_ENV;
use dnstrails::utils::setup_logging;
use dnstrails::{print_history, Args, Config, FetchError, HistoryClient};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = Config::resolve(&args)?;
    let client = HistoryClient::new(config);

    println!("Fetching history for {}...", args.domain);

    match client.fetch_a_records(&args.domain) {
        Ok(history) => {
            print_history(&history, &args.domain);
            Ok(())
        }
        Err(FetchError::NotFound) => {
            println!("SecurityTrails has no history for {}", args.domain);
            Ok(())
        }
        Err(FetchError::MissingCredential) => {
            eprintln!(
                "Error: no API key provided. Set {} or pass --api-key.",
                API_KEY_ENV
            );
            eprintln!("Please get a free API key from https://securitytrails.com/corp/api");
            process::exit(1);
        }
        Err(FetchError::Unauthorized) => {
            eprintln!(
                "Error: SecurityTrails rejected the API key (401). Check {} or --api-key.",
                API_KEY_ENV
            );
            process::exit(1);
        }
        Err(FetchError::Network(msg)) => {
            eprintln!("Warning: network failure talking to SecurityTrails: {}", msg);
            process::exit(1);
        }
        Err(FetchError::InvalidPayload(msg)) => {
            eprintln!(
                "Warning: could not parse the SecurityTrails response: {}",
                msg
            );
            process::exit(1);
        }
        Err(FetchError::ApiError {
            status,
            status_text,
            body,
        }) => {
            eprintln!(
                "Error fetching data from SecurityTrails: {} {}",
                status, status_text
            );
            eprintln!("Response body: {}", body);
            process::exit(1);
        }
    }
}
