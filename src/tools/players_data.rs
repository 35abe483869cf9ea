//! Analytical tool: structured player records for computation.

use async_trait::async_trait;
use serde_json::Value;

use super::{team_id_arg, team_id_schema, OutputType, Tool, ToolDefinition, ToolOutput};
use crate::{
    br::{normalize::normalize_players, BrClient, LastResponse, PlayerRecord},
    Result, TeamId,
};

const DESCRIPTION: &str = "Returns structured player data for a team as a list of records. \
    Each record contains: name (str), age (int), nationality (str), csr (int), energy (int), \
    skills (object with stamina, handling, attack, defense, speed), contract_until (str). \
    This output is intended for computation and analysis.";

/// Fetches a team and normalizes every player into a [`PlayerRecord`].
#[derive(Debug)]
pub struct TeamDataFetcher {
    client: BrClient,
    last_response: LastResponse,
}

impl TeamDataFetcher {
    pub const NAME: &'static str = "get_players_data_from_team";
    pub const OUTPUT_TYPE: OutputType = OutputType::Object;

    /// Definition as offered to an agent runtime; no client needed.
    pub fn tool_definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: DESCRIPTION.to_string(),
            input_schema: team_id_schema(),
            output_type: Self::OUTPUT_TYPE,
        }
    }

    pub fn new(client: BrClient) -> Self {
        Self {
            client,
            last_response: LastResponse::default(),
        }
    }

    /// One record per player in the API's collection, in API order.
    ///
    /// # Errors
    ///
    /// - [`crate::BrError::Http`] on network failure or non-success status
    /// - [`crate::BrError::Api`] / [`crate::BrError::MalformedResponse`] when
    ///   the envelope is rejected
    /// - [`crate::BrError::MissingPlayerField`] /
    ///   [`crate::BrError::InvalidPlayerField`] when a player has no usable age
    pub async fn fetch_players(&self, team_id: TeamId) -> Result<Vec<PlayerRecord>> {
        let players = self.client.fetch_team(team_id, &self.last_response).await?;
        normalize_players(&players)
    }

    /// Raw JSON of the most recent response, if any.
    pub fn last_response(&self) -> Option<Value> {
        self.last_response.get()
    }
}

#[async_trait]
impl Tool for TeamDataFetcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        team_id_schema()
    }

    fn output_type(&self) -> OutputType {
        Self::OUTPUT_TYPE
    }

    async fn invoke(&self, args: Value) -> Result<ToolOutput> {
        let team_id = team_id_arg(Self::NAME, &args)?;
        Ok(ToolOutput::Records(self.fetch_players(team_id).await?))
    }
}
