use std::env;

use anyhow::{Context, Result};
use url::Url;

use crate::args::Args;

pub const DEFAULT_API_BASE: &str = "https://api.securitytrails.com/v1";
pub const API_KEY_ENV: &str = "SECURITYTRAILS_API_KEY";

/// Endpoint and credential for the history API, passed into
/// [`crate::HistoryClient::new`] instead of being read ambiently.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(api_base: Url, api_key: Option<String>) -> Self {
        Self { api_base, api_key }
    }

    /// Build the configuration from parsed arguments. The --api-key flag
    /// wins over the environment variable; empty values count as absent.
    pub fn resolve(args: &Args) -> Result<Self> {
        let api_base = args.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        let api_base = Url::parse(api_base)
            .with_context(|| format!("Invalid API base URL: {}", api_base))?;

        let api_key = args
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()));

        Ok(Self { api_base, api_key })
    }
}
