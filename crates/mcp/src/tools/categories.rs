// Category tools

use crate::protocol::ToolSchema;
use crate::tools::{budget_id_schema, json_schema_object, json_schema_string, parse_args, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

#[derive(Debug, Deserialize)]
struct GetCategoriesArgs {
    budget_id: String,
}

pub struct GetCategoriesTool {
    client: Arc<YnabClient>,
}

impl GetCategoriesTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetCategoriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_categories".to_string(),
            description: "Get all categories for a budget".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({"budget_id": budget_id_schema()}),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetCategoriesArgs = parse_args("get_categories", arguments)?;
        self.client.categories(&args.budget_id).await
    }
}

#[derive(Debug, Deserialize)]
struct GetCategoryArgs {
    budget_id: String,
    category_id: String,
}

pub struct GetCategoryTool {
    client: Arc<YnabClient>,
}

impl GetCategoryTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetCategoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_category".to_string(),
            description: "Get a single category by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "category_id": json_schema_string("The category ID"),
                }),
                vec!["budget_id", "category_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetCategoryArgs = parse_args("get_category", arguments)?;
        self.client
            .category(&args.budget_id, &args.category_id)
            .await
    }
}
