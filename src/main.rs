// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Load .env (if any) and set up logging to stderr
// 2. Parse command-line arguments using clap and build the Config
// 3. Run a single lookup or the interactive session
// 4. Exit with proper code (0 = user shown, 1 = search failed, 2 = error)
// =============================================================================

mod cli;
mod config;
mod github;
mod render;
mod repl;
mod search;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;
use github::{GitHubClient, ProfileApi};
use search::{ProfileSearch, Submission, ViewState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let search = ProfileSearch::new(GitHubClient::new(&config)?);

    match cli.command {
        Some(Commands::Lookup { login, json }) => {
            let mut stdout = std::io::stdout().lock();
            handle_lookup(&search, &login, json, &mut stdout).await
        }
        Some(Commands::Interactive) | None => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            repl::run_session(Arc::new(search), stdin, &mut stdout).await?;
            Ok(0)
        }
    }
}

// Handles the 'lookup' subcommand
//
// Returns the exit code: 0 when a profile was shown, 1 otherwise.
// A blank login is a no-op, the same as pressing Enter in an empty box,
// so nothing is printed and no request is made.
async fn handle_lookup<A, W>(
    search: &ProfileSearch<A>,
    login: &str,
    json: bool,
    out: &mut W,
) -> Result<i32>
where
    A: ProfileApi,
    W: Write,
{
    let state = match search.submit(login).await {
        Submission::Settled(state) => state,
        Submission::Ignored(reason) => {
            tracing::warn!(?reason, "nothing looked up");
            return Ok(1);
        }
    };

    if json {
        let body = serde_json::to_string_pretty(&state).context("Failed to encode view as JSON")?;
        writeln!(out, "{}", body)?;
    } else {
        write!(out, "{}", render::render(&state))?;
    }

    Ok(match state {
        ViewState::Result { .. } => 0,
        _ => 1,
    })
}
