// Tool trait and registry

use crate::protocol::ToolSchema;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use ynab_client::YnabError;

/// A named, schema-described operation.
///
/// `execute` validates its arguments before touching the network and returns
/// the raw upstream payload; translation into a protocol envelope happens at
/// the dispatch boundary in [`crate::server::McpServer`].
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Descriptor advertised via `tools/list`.
    fn schema(&self) -> ToolSchema;

    /// Run the tool with the given arguments.
    async fn execute(&self, arguments: serde_json::Value) -> Result<serde_json::Value, YnabError>;
}

/// Registry of available tools, keyed by name.
///
/// A BTreeMap keeps `tools/list` output in a stable order across calls.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool under its schema name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize tool arguments into a typed struct.
///
/// Missing required keys and type mismatches become
/// [`YnabError::InvalidArguments`] naming the violation, before any upstream
/// call is issued.
pub fn parse_args<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T, YnabError> {
    serde_json::from_value(arguments)
        .map_err(|e| YnabError::InvalidArguments(format!("{}: {}", tool, e)))
}

// Helper functions for building tool input schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_string_enum(description: &str, values: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "enum": values
    })
}

/// Schema for the `budget_id` argument shared by nearly every tool.
pub fn budget_id_schema() -> serde_json::Value {
    json_schema_string("The budget ID or 'last-used'")
}
