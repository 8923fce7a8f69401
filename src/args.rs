use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "dnstrails",
    about = "Look up the historical DNS A records for a domain via the SecurityTrails API",
    version,
    long_about = None
)]
pub struct Args {
    /// Domain to look up
    pub domain: String,

    /// SecurityTrails API key (falls back to the SECURITYTRAILS_API_KEY environment variable)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
