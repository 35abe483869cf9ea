//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::TeamId;

use crate::{config::BR_API_BASE_URL, API_URL_ENV_VAR};

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Keys file (or set `BR_KEYS_FILE`; defaults to `./.brkeys`).
    #[clap(long, global = true)]
    pub keys: Option<PathBuf>,

    /// BR API base URL (or set `BR_API_URL`).
    #[clap(long, global = true, env = API_URL_ENV_VAR, default_value = BR_API_BASE_URL)]
    pub api_url: String,

    /// Give up on the API after this many seconds (no timeout by default).
    #[clap(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log more (repeatable: `-v` info, `-vv` debug).
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum PlayersCmd {
    /// Structured player records for a team.
    Data {
        /// Team ID (defaults to `MY_TEAM_ID` from the keys file).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Human-readable team summary.
    Info {
        /// Team ID (defaults to `MY_TEAM_ID` from the keys file).
        #[clap(long, short)]
        team_id: Option<TeamId>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ToolsCmd {
    /// Print the tool definitions offered to an agent runtime.
    List {
        /// Output definitions as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Invoke a tool by name with JSON arguments.
    Call {
        /// Tool name, e.g. `get_players_info_from_team`.
        name: String,

        /// JSON object of arguments, e.g. `{"team_id": 57796}`.
        #[clap(long, default_value = "{}")]
        args: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "br-agent", about = "Blackout Rugby team data tools")]
pub struct BrAgent {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query a team's players directly
    Players {
        #[clap(subcommand)]
        cmd: PlayersCmd,
    },

    /// Inspect or call the agent tool surface
    Tools {
        #[clap(subcommand)]
        cmd: ToolsCmd,
    },
}
