pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod months;
pub mod payees;
mod registry;
pub mod scheduled;
pub mod transactions;

pub use registry::{
    budget_id_schema, json_schema_object, json_schema_string, json_schema_string_enum,
    parse_args, Tool, ToolRegistry,
};

use std::sync::Arc;
use ynab_client::YnabClient;

/// Build the complete tool catalog backed by the given client.
pub fn all_tools(client: Arc<YnabClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(budgets::GetBudgetsTool::new(client.clone())));
    registry.register(Arc::new(budgets::GetBudgetTool::new(client.clone())));
    registry.register(Arc::new(budgets::GetBudgetSettingsTool::new(client.clone())));

    registry.register(Arc::new(accounts::GetAccountsTool::new(client.clone())));
    registry.register(Arc::new(accounts::GetAccountTool::new(client.clone())));

    registry.register(Arc::new(categories::GetCategoriesTool::new(client.clone())));
    registry.register(Arc::new(categories::GetCategoryTool::new(client.clone())));

    registry.register(Arc::new(payees::GetPayeesTool::new(client.clone())));
    registry.register(Arc::new(payees::GetPayeeTool::new(client.clone())));

    registry.register(Arc::new(transactions::GetTransactionsTool::new(client.clone())));
    registry.register(Arc::new(transactions::GetTransactionTool::new(client.clone())));
    registry.register(Arc::new(transactions::GetTransactionsByAccountTool::new(
        client.clone(),
    )));
    registry.register(Arc::new(transactions::GetTransactionsByCategoryTool::new(
        client.clone(),
    )));
    registry.register(Arc::new(transactions::GetTransactionsByPayeeTool::new(
        client.clone(),
    )));

    registry.register(Arc::new(months::GetMonthsTool::new(client.clone())));
    registry.register(Arc::new(months::GetMonthTool::new(client.clone())));

    registry.register(Arc::new(scheduled::GetScheduledTransactionsTool::new(
        client.clone(),
    )));
    registry.register(Arc::new(scheduled::GetScheduledTransactionTool::new(client)));

    registry
}
