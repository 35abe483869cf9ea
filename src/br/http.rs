//! HTTP access to the BR classic API.

use std::sync::Mutex;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::types::{Envelope, PlayerCollection};
use crate::{
    config::{ClientConfig, Credentials},
    error::BrError,
    Result, TeamId,
};


/// Request code selecting the players listing.
pub const PLAYERS_REQUEST: &str = "p";

/// Envelope status marking success.
pub const STATUS_OK: &str = "Ok";

/// Most recent raw API response seen by one caller, kept for introspection.
///
/// Each tool owns its own slot so concurrent sessions never see each other's
/// responses.
#[derive(Debug, Default)]
pub struct LastResponse(Mutex<Option<Value>>);

impl LastResponse {
    pub fn store(&self, value: Value) {
        let mut slot = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(value);
    }

    pub fn get(&self) -> Option<Value> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Client bound to one set of credentials.
#[derive(Debug, Clone)]
pub struct BrClient {
    http: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl BrClient {
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("br-agent/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query parameters for a players request. Optional credentials that are
    /// not configured are left out entirely.
    pub fn request_params(&self, team_id: TeamId) -> Vec<(&'static str, String)> {
        let creds = &self.credentials;
        let params = [
            ("d", creds.dev_id.clone()),
            ("dk", creds.dev_key.clone()),
            ("r", Some(PLAYERS_REQUEST.to_string())),
            ("m", creds.member_id.clone()),
            ("teamid", Some(team_id.to_string())),
            ("mk", Some(creds.access_key.clone())),
            ("json", Some("1".to_string())),
        ];

        params
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// Issue the players request and parse the body as JSON.
    ///
    /// A non-success status is returned as [`BrError::Http`] before the body
    /// is read.
    pub async fn fetch_raw(&self, team_id: TeamId) -> Result<Value> {
        let url = self.config.base_url.as_str();
        debug!(%team_id, url, "requesting team players");

        let body = self
            .http
            .get(url)
            .query(&self.request_params(team_id))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body)
            .map_err(|e| BrError::malformed(format!("body is not valid JSON: {}", e)))
    }

    /// Fetch a team and validate the envelope, returning its player
    /// collection. The raw response is recorded in `last_response` whenever
    /// one was received, including rejected ones.
    pub async fn fetch_team(
        &self,
        team_id: TeamId,
        last_response: &LastResponse,
    ) -> Result<PlayerCollection> {
        let raw = self.fetch_raw(team_id).await?;
        last_response.store(raw.clone());

        let players = validate_envelope(raw)?;
        info!(%team_id, count = players.len(), "fetched team players");
        Ok(players)
    }
}

/// Check the envelope status and extract the player collection.
pub fn validate_envelope(raw: Value) -> Result<PlayerCollection> {
    if !raw.is_object() {
        return Err(BrError::malformed("expected a JSON object at the top level"));
    }

    let envelope = Envelope::deserialize(raw)
        .map_err(|e| BrError::malformed(format!("unexpected envelope: {}", e)))?;

    match envelope.status {
        Some(Value::String(status)) if status == STATUS_OK => {}
        Some(Value::String(status)) => return Err(BrError::Api { status }),
        Some(other) => {
            return Err(BrError::Api {
                status: other.to_string(),
            })
        }
        None => {
            return Err(BrError::Api {
                status: "<missing>".to_string(),
            })
        }
    }

    PlayerCollection::from_value(envelope.players)
}
