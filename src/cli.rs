// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with structs,
// enums and #[...] attributes, and clap generates the parser.
//
// Without a subcommand the program starts an interactive session.
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gh-profile",
    version,
    about = "Look up a GitHub user and their newest repositories",
    long_about = "gh-profile looks up a GitHub user by login and shows their profile \
                  together with the five repositories they created most recently."
)]
pub struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(
        long,
        global = true,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com"
    )]
    pub api_url: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, env = "GH_PROFILE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one user and print the result
    ///
    /// Example: gh-profile lookup octocat
    Lookup {
        /// GitHub login to look up (surrounding whitespace is ignored)
        login: String,

        /// Print the final view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive search session (the default)
    ///
    /// Type a login and press Enter to search. `:search` runs the search
    /// again with the current input, `:quit` exits.
    Interactive,
}
