//! Tool surface commands

use serde_json::Value;

use crate::{
    error::BrError, tools::team_tool_definitions, BrClient, Result, ToolOutput, ToolRegistry,
};

/// Handle `tools list`; works without a keys file.
pub fn handle_tools_list(as_json: bool) -> Result<()> {
    let definitions = team_tool_definitions();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for def in definitions {
        println!("{} -> {}", def.name, def.output_type.as_str());
        println!("  {}", def.description);
    }
    Ok(())
}

/// Parse CLI-supplied tool arguments; they must form a JSON object.
pub fn parse_tool_args(name: &str, args: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(args).map_err(|e| BrError::InvalidToolArgs {
        tool: name.to_string(),
        message: format!("arguments are not valid JSON: {}", e),
    })?;

    if !value.is_object() {
        return Err(BrError::InvalidToolArgs {
            tool: name.to_string(),
            message: "arguments must be a JSON object".to_string(),
        });
    }
    Ok(value)
}

/// Handle `tools call`
pub async fn handle_tool_call(client: BrClient, name: &str, args: &str) -> Result<()> {
    let args = parse_tool_args(name, args)?;
    let registry = ToolRegistry::with_team_tools(client);

    match registry.invoke(name, args).await? {
        ToolOutput::Text(text) => println!("{}", text),
        records @ ToolOutput::Records(_) => {
            println!("{}", serde_json::to_string_pretty(&records.to_json()?)?)
        }
    }
    Ok(())
}
