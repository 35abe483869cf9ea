//! Tool surface exposed to an agent runtime.
//!
//! Each tool advertises a name, a description the orchestrator uses to pick
//! it, a JSON schema for its arguments and the kind of value it returns. The
//! [`ToolRegistry`] dispatches calls by name.

pub mod players_data;
pub mod players_info;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{br::BrClient, br::PlayerRecord, error::BrError, Result, TeamId};

pub use players_data::TeamDataFetcher;
pub use players_info::TeamInfoFormatter;

/// Shape of a tool's return value, as declared to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Structured data meant for further computation.
    Object,
    /// Final text meant for the end user.
    String,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Object => "object",
            OutputType::String => "string",
        }
    }
}

/// What a tool hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Records(Vec<PlayerRecord>),
    Text(String),
}

impl ToolOutput {
    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            ToolOutput::Records(records) => serde_json::to_value(records)?,
            ToolOutput::Text(text) => Value::String(text.clone()),
        })
    }
}

/// Everything an agent runtime needs to offer a tool to a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_type: OutputType,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> Value;

    fn output_type(&self) -> OutputType;

    async fn invoke(&self, args: Value) -> Result<ToolOutput>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            output_type: self.output_type(),
        }
    }
}

/// Schema shared by both team tools: one required integer `team_id`.
pub fn team_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "team_id": {
                "type": "integer",
                "description": "The identification number ID of the team"
            }
        },
        "required": ["team_id"]
    })
}

/// Pull a positive `team_id` out of tool arguments.
pub fn team_id_arg(tool: &str, args: &Value) -> Result<TeamId> {
    let invalid = |message: String| BrError::InvalidToolArgs {
        tool: tool.to_string(),
        message,
    };

    let raw = args
        .get("team_id")
        .ok_or_else(|| invalid("missing required argument `team_id`".to_string()))?;
    serde_json::from_value(raw.clone())
        .map_err(|_| invalid(format!("`team_id` must be a positive integer, got {}", raw)))
}

/// Definitions of both team tools, in registry order, without building a client.
pub fn team_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        TeamDataFetcher::tool_definition(),
        TeamInfoFormatter::tool_definition(),
    ]
}

/// Tools keyed by name, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding both team tools, each with its own client copy.
    pub fn with_team_tools(client: BrClient) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TeamDataFetcher::new(client.clone())));
        registry.register(Box::new(TeamInfoFormatter::new(client)));
        registry
    }

    /// Register a tool, replacing any tool of the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        match self.tools.iter_mut().find(|t| t.name() == name) {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub async fn invoke(&self, name: &str, args: Value) -> Result<ToolOutput> {
        let tool = self.get(name).ok_or_else(|| BrError::UnknownTool {
            name: name.to_string(),
        })?;
        debug!(tool = name, %args, "invoking tool");
        tool.invoke(args).await
    }
}
