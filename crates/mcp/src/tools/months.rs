// Budget month tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, json_schema_string, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

#[derive(Debug, Deserialize)]
struct GetMonthsArgs {
    budget_id: String,
}

pub struct GetMonthsTool {
    client: Arc<YnabClient>,
}

impl GetMonthsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetMonthsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_months".to_string(),
            description: "Get all budget months".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetMonthsArgs = parse_args("get_months", arguments)?;
        self.client.months(&args.budget_id).await
    }
}

#[derive(Debug, Deserialize)]
struct GetMonthArgs {
    budget_id: String,
    month: String,
}

pub struct GetMonthTool {
    client: Arc<YnabClient>,
}

impl GetMonthTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetMonthTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_month".to_string(),
            description: "Get a single budget month with category balances".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "month": json_schema_string(
                        "The month in YYYY-MM-DD format (day will be ignored)"
                    ),
                }),
                vec!["budget_id", "month"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetMonthArgs = parse_args("get_month", arguments)?;
        self.client.month(&args.budget_id, &args.month).await
    }
}
