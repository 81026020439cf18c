// Account tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, json_schema_string, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

#[derive(Debug, Deserialize)]
struct GetAccountsArgs {
    budget_id: String,
}

pub struct GetAccountsTool {
    client: Arc<YnabClient>,
}

impl GetAccountsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetAccountsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_accounts".to_string(),
            description: "Get all accounts for a budget".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetAccountsArgs = parse_args("get_accounts", arguments)?;
        self.client.accounts(&args.budget_id).await
    }
}

#[derive(Debug, Deserialize)]
struct GetAccountArgs {
    budget_id: String,
    account_id: String,
}

pub struct GetAccountTool {
    client: Arc<YnabClient>,
}

impl GetAccountTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetAccountTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_account".to_string(),
            description: "Get a single account by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "account_id": json_schema_string("The account ID"),
                }),
                vec!["budget_id", "account_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetAccountArgs = parse_args("get_account", arguments)?;
        self.client
            .account(&args.budget_id, &args.account_id)
            .await
    }
}
