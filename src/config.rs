// src/config.rs
// =============================================================================
// Runtime configuration.
//
// Values come from the command line, which falls back to environment
// variables (a .env file is loaded in main before parsing). This module
// validates them and turns them into the types the client needs.
// =============================================================================

use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the GitHub REST API, e.g. https://api.github.com
    pub api_url: Url,
    /// Per-request timeout. None means requests may wait forever.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Config> {
        let api_url = Url::parse(&cli.api_url)
            .with_context(|| format!("Invalid API URL '{}'", cli.api_url))?;

        if !matches!(api_url.scheme(), "http" | "https") {
            bail!("API URL must use http or https: {}", api_url);
        }

        // 0 turns the timeout off
        let timeout = match cli.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Config { api_url, timeout })
    }
}
