//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use br_agent::{
    BrClient,
    cli::{BrAgent, Commands, GlobalOpts, PlayersCmd, ToolsCmd},
    commands::{
        build_client,
        players::{handle_players_data, handle_players_info},
        tools::{handle_tool_call, handle_tools_list},
    },
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "br_agent=warn",
        1 => "br_agent=info",
        _ => "br_agent=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Only commands that talk to the API need a keys file.
fn client(global: &GlobalOpts) -> anyhow::Result<BrClient> {
    build_client(global).context("could not set up the BR API client")
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = BrAgent::parse();
    init_tracing(app.global.verbose);

    match app.command {
        Commands::Players { cmd } => match cmd {
            PlayersCmd::Data { team_id, json } => {
                handle_players_data(client(&app.global)?, team_id, json)
                    .await
                    .context("players data failed")?
            }
            PlayersCmd::Info { team_id } => handle_players_info(client(&app.global)?, team_id)
                .await
                .context("players info failed")?,
        },

        Commands::Tools { cmd } => match cmd {
            ToolsCmd::List { json } => handle_tools_list(json)?,
            ToolsCmd::Call { name, args } => handle_tool_call(client(&app.global)?, &name, &args)
                .await
                .with_context(|| format!("tool {} failed", name))?,
        },
    }

    Ok(())
}
