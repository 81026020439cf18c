// Scheduled transaction tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, json_schema_string, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

#[derive(Debug, Deserialize)]
struct GetScheduledTransactionsArgs {
    budget_id: String,
}

pub struct GetScheduledTransactionsTool {
    client: Arc<YnabClient>,
}

impl GetScheduledTransactionsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetScheduledTransactionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_scheduled_transactions".to_string(),
            description: "Get all scheduled transactions for a budget".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetScheduledTransactionsArgs =
            parse_args("get_scheduled_transactions", arguments)?;
        self.client.scheduled_transactions(&args.budget_id).await
    }
}

#[derive(Debug, Deserialize)]
struct GetScheduledTransactionArgs {
    budget_id: String,
    scheduled_transaction_id: String,
}

pub struct GetScheduledTransactionTool {
    client: Arc<YnabClient>,
}

impl GetScheduledTransactionTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetScheduledTransactionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_scheduled_transaction".to_string(),
            description: "Get a single scheduled transaction by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "scheduled_transaction_id": json_schema_string(
                        "The scheduled transaction ID"
                    ),
                }),
                vec!["budget_id", "scheduled_transaction_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetScheduledTransactionArgs =
            parse_args("get_scheduled_transaction", arguments)?;
        self.client
            .scheduled_transaction(&args.budget_id, &args.scheduled_transaction_id)
            .await
    }
}
