//! Command implementations for the BR agent CLI

pub mod players;
pub mod tools;

use std::time::Duration;

use crate::{
    cli::GlobalOpts,
    config::{resolve_keys_path, ClientConfig, Credentials},
    BrClient, Result, TeamId,
};

/// Load credentials and build a client from the global CLI options.
pub fn build_client(opts: &GlobalOpts) -> Result<BrClient> {
    let keys_path = resolve_keys_path(opts.keys.clone());
    let credentials = Credentials::load(&keys_path)?;

    let config = ClientConfig::default()
        .with_base_url(opts.api_url.clone())
        .with_timeout(opts.timeout_secs.map(Duration::from_secs));

    BrClient::new(credentials, config)
}

/// Explicit team, otherwise the member's own team from the keys file.
pub fn resolve_team_id(team_id: Option<TeamId>, credentials: &Credentials) -> TeamId {
    team_id.unwrap_or(credentials.team_id)
}
