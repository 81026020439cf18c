// Payee tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, json_schema_string, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

#[derive(Debug, Deserialize)]
struct GetPayeesArgs {
    budget_id: String,
}

pub struct GetPayeesTool {
    client: Arc<YnabClient>,
}

impl GetPayeesTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetPayeesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_payees".to_string(),
            description: "Get all payees for a budget".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetPayeesArgs = parse_args("get_payees", arguments)?;
        self.client.payees(&args.budget_id).await
    }
}

#[derive(Debug, Deserialize)]
struct GetPayeeArgs {
    budget_id: String,
    payee_id: String,
}

pub struct GetPayeeTool {
    client: Arc<YnabClient>,
}

impl GetPayeeTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetPayeeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_payee".to_string(),
            description: "Get a single payee by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "payee_id": json_schema_string("The payee ID"),
                }),
                vec!["budget_id", "payee_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetPayeeArgs = parse_args("get_payee", arguments)?;
        self.client.payee(&args.budget_id, &args.payee_id).await
    }
}
