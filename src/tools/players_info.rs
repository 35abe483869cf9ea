//! Display tool: formatted team summary for the end user.

use async_trait::async_trait;
use serde_json::Value;

use super::{team_id_arg, team_id_schema, OutputType, Tool, ToolDefinition, ToolOutput};
use crate::{
    br::{summary::render_team_summary, BrClient, LastResponse},
    Result, TeamId,
};

const DESCRIPTION: &str = "Returns a formatted, human-readable text summary of all players \
    in a team. This tool is intended for display and information only. \
    It returns formatted text and is not suitable for programmatic analysis or computation.";

/// Fetches a team and renders it as text.
#[derive(Debug)]
pub struct TeamInfoFormatter {
    client: BrClient,
    last_response: LastResponse,
}

impl TeamInfoFormatter {
    pub const NAME: &'static str = "get_players_info_from_team";
    pub const OUTPUT_TYPE: OutputType = OutputType::String;

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

    pub async fn format_team_summary(&self, team_id: TeamId) -> Result<String> {
        let players = self.client.fetch_team(team_id, &self.last_response).await?;
        render_team_summary(team_id, &players)
    }

    pub fn last_response(&self) -> Option<Value> {
        self.last_response.get()
    }
}

#[async_trait]
impl Tool for TeamInfoFormatter {
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
        Ok(ToolOutput::Text(self.format_team_summary(team_id).await?))
    }
}
