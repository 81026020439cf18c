// Transaction tools

use crate::protocol::ToolSchema;
use crate::tools::{
    budget_id_schema, json_schema_object, json_schema_string, json_schema_string_enum,
    parse_args, Tool,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use ynab_client::{YnabClient, YnabError};

const SINCE_DATE_DESC: &str = "Filter transactions since this date (YYYY-MM-DD)";

/// Upstream transaction type filter.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TransactionType {
    Uncategorized,
    Unapproved,
}

impl TransactionType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Uncategorized => "uncategorized",
            Self::Unapproved => "unapproved",
        }
    }
}

fn since_date_schema() -> Value {
    json_schema_string(SINCE_DATE_DESC)
}

#[derive(Debug, Deserialize)]
struct GetTransactionsArgs {
    budget_id: String,
    #[serde(default)]
    since_date: Option<String>,
    #[serde(rename = "type", default)]
    type_filter: Option<TransactionType>,
}

pub struct GetTransactionsTool {
    client: Arc<YnabClient>,
}

impl GetTransactionsTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_transactions".to_string(),
            description: "Get transactions for a budget. Optionally filter by date or type."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "since_date": since_date_schema(),
                    "type": json_schema_string_enum(
                        "Filter by type: 'uncategorized' or 'unapproved'",
                        &["uncategorized", "unapproved"],
                    ),
                }),
                vec!["budget_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetTransactionsArgs = parse_args("get_transactions", arguments)?;
        self.client
            .transactions(
                &args.budget_id,
                args.since_date.as_deref(),
                args.type_filter.map(TransactionType::as_str),
            )
            .await
    }
}

#[derive(Debug, Deserialize)]
struct GetTransactionArgs {
    budget_id: String,
    transaction_id: String,
}

pub struct GetTransactionTool {
    client: Arc<YnabClient>,
}

impl GetTransactionTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_transaction".to_string(),
            description: "Get a single transaction by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "transaction_id": json_schema_string("The transaction ID"),
                }),
                vec!["budget_id", "transaction_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: GetTransactionArgs = parse_args("get_transaction", arguments)?;
        self.client
            .transaction(&args.budget_id, &args.transaction_id)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ByAccountArgs {
    budget_id: String,
    account_id: String,
    #[serde(default)]
    since_date: Option<String>,
}

pub struct GetTransactionsByAccountTool {
    client: Arc<YnabClient>,
}

impl GetTransactionsByAccountTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionsByAccountTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_transactions_by_account".to_string(),
            description: "Get transactions for a specific account".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "account_id": json_schema_string("The account ID"),
                    "since_date": since_date_schema(),
                }),
                vec!["budget_id", "account_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: ByAccountArgs = parse_args("get_transactions_by_account", arguments)?;
        self.client
            .account_transactions(&args.budget_id, &args.account_id, args.since_date.as_deref())
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ByCategoryArgs {
    budget_id: String,
    category_id: String,
    #[serde(default)]
    since_date: Option<String>,
}

pub struct GetTransactionsByCategoryTool {
    client: Arc<YnabClient>,
}

impl GetTransactionsByCategoryTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionsByCategoryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_transactions_by_category".to_string(),
            description: "Get transactions for a specific category".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "category_id": json_schema_string("The category ID"),
                    "since_date": since_date_schema(),
                }),
                vec!["budget_id", "category_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: ByCategoryArgs = parse_args("get_transactions_by_category", arguments)?;
        self.client
            .category_transactions(
                &args.budget_id,
                &args.category_id,
                args.since_date.as_deref(),
            )
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ByPayeeArgs {
    budget_id: String,
    payee_id: String,
    #[serde(default)]
    since_date: Option<String>,
}

pub struct GetTransactionsByPayeeTool {
    client: Arc<YnabClient>,
}

impl GetTransactionsByPayeeTool {
    pub fn new(client: Arc<YnabClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionsByPayeeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_transactions_by_payee".to_string(),
            description: "Get transactions for a specific payee".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "budget_id": budget_id_schema(),
                    "payee_id": json_schema_string("The payee ID"),
                    "since_date": since_date_schema(),
                }),
                vec!["budget_id", "payee_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<Value, YnabError> {
        let args: ByPayeeArgs = parse_args("get_transactions_by_payee", arguments)?;
        self.client
            .payee_transactions(&args.budget_id, &args.payee_id, args.since_date.as_deref())
            .await
    }
}
