// Budget tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

/// Lists every budget on the account.
pub struct GetBudgetsTool {
    client: Arc<YnabClient>,
}

impl GetBudgetsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetBudgetsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_budgets".to_string(),
            description: "Get all budgets associated with the YNAB account".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<Value, YnabError> {
        self.client.budgets().await
    }
}

#[derive(Debug, Deserialize)]
struct GetBudgetArgs {
    budget_id: String,
}

/// Fetches a single budget, including accounts, categories, and payees.
pub struct GetBudgetTool {
    client: Arc<YnabClient>,
}

impl GetBudgetTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetBudgetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_budget".to_string(),
            description:
                "Get a single budget by ID. Use 'last-used' for the most recently accessed budget."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetBudgetArgs = parse_args("get_budget", arguments)?;
        self.client.budget(&args.budget_id).await
    }
}

/// Fetches budget settings, including the currency format.
pub struct GetBudgetSettingsTool {
    client: Arc<YnabClient>,
}

impl GetBudgetSettingsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetBudgetSettingsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_budget_settings".to_string(),
            description: "Get settings for a budget including currency format".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetBudgetArgs = parse_args("get_budget_settings", arguments)?;
        self.client.budget_settings(&args.budget_id).await
    }
}
