// MCP (Model Context Protocol) server for the YNAB API
// Exposes read-only budget operations as tools over JSON-RPC 2.0 stdio

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
