//! Argument definitions for the `stack` binary.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "stack",
    version,
    about = "Browse Stack Exchange sites and badges from the command line"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API root URL (defaults to the public Stack Exchange API).
    #[arg(long, global = true, env = "STACK_API_URL")]
    pub api_url: Option<String>,

    /// Application key; raises the anonymous request quota.
    #[arg(long, global = true, env = "STACK_API_KEY")]
    pub key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "STACK_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Emit raw JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every site on the network
    Sites,

    /// Find the site best matching a name
    Site {
        /// Full or partial site name (case-insensitive)
        name: String,
    },

    /// List the badges of a site
    Badges {
        /// Full or partial site name
        site: String,
    },

    /// Show a single badge of a site
    Badge {
        /// Full or partial site name
        site: String,
        /// Numeric badge id
        id: String,
    },
}
