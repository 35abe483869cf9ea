//! Blackout Rugby agent tools
//!
//! A Rust library for answering questions about Blackout Rugby teams: it
//! fetches a team's players from the BR classic API and returns them either as
//! structured records for computation or as formatted text for display. Both
//! operations are exposed as named, schema-described tools an agent runtime
//! can call.
//!
//! ## Features
//!
//! - **Player Data**: normalized [`PlayerRecord`]s with coerced ages and ratings
//! - **Team Summary**: a fixed-layout text summary for end users
//! - **Tool Surface**: a [`Tool`] trait and [`ToolRegistry`] dispatching by name
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use br_agent::{BrClient, ClientConfig, Credentials, TeamDataFetcher, TeamId};
//!
//! # async fn example() -> br_agent::Result<()> {
//! let credentials = Credentials::load(".brkeys".as_ref())?;
//! let client = BrClient::new(credentials, ClientConfig::default())?;
//!
//! let fetcher = TeamDataFetcher::new(client);
//! let players = fetcher.fetch_players(TeamId::new(57796)).await?;
//! println!("{} players", players.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point at a keys file other than `./.brkeys`:
//! ```bash
//! export BR_KEYS_FILE=~/secrets/brkeys.json
//! ```

pub mod br;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tools;

// Re-export commonly used types
pub use br::{BrClient, PlayerRecord};
pub use cli::types::TeamId;
pub use config::{ClientConfig, Credentials};
pub use error::{BrError, ErrorKind, Result};
pub use tools::{TeamDataFetcher, TeamInfoFormatter, Tool, ToolOutput, ToolRegistry};

pub const KEYS_FILE_ENV_VAR: &str = "BR_KEYS_FILE";
pub const API_URL_ENV_VAR: &str = "BR_API_URL";
pub const DEFAULT_KEYS_FILE: &str = ".brkeys";
