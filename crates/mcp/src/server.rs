// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::StreamExt;
use serde_json::{json, Value};
use tokio::io::AsyncWriteExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{error, info, warn};
use ynab_client::YnabError;

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve JSON-RPC over stdin/stdout until the input stream closes.
    ///
    /// Each invocation is independent; the hosting runtime may interleave
    /// them freely. Logging goes to stderr, stdout carries only protocol
    /// frames.
    pub async fn run(&self) -> Result<()> {
        let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
        let mut stdout = tokio::io::stdout();

        info!(tools = self.registry.len(), "MCP server listening on stdio");

        while let Some(line) = lines.next().await {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                stdout.write_all(frame.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Parse one frame and handle it. Unparseable input gets a JSON-RPC
    /// parse error with a null id.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "unparseable frame");
                Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
            }
        }
    }

    /// Route a request. Notifications (no id) produce no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id;
        match request.method.as_str() {
            "initialize" => {
                id.map(|id| JsonRpcResponse::success(id, self.initialize_result()))
            }
            "ping" => id.map(|id| JsonRpcResponse::success(id, json!({}))),
            method if method.starts_with("notifications/") => None,
            "tools/list" => id.map(|id| {
                JsonRpcResponse::success(
                    id,
                    ListToolsResult {
                        tools: self.registry.list_schemas(),
                    },
                )
            }),
            "tools/call" => {
                let id = id?;
                let params: CallToolParams =
                    match serde_json::from_value(request.params.unwrap_or_else(|| json!({}))) {
                        Ok(params) => params,
                        Err(e) => {
                            return Some(JsonRpcResponse::error(
                                id,
                                JsonRpcError::invalid_params(format!("tools/call: {}", e)),
                            ));
                        }
                    };
                let arguments = params.arguments.unwrap_or_else(|| json!({}));
                let result = self.dispatch(&params.name, arguments).await;
                Some(JsonRpcResponse::success(id, result))
            }
            other => id.map(|id| JsonRpcResponse::error(id, JsonRpcError::method_not_found(other))),
        }
    }

    /// Execute a tool and translate the outcome into a call result.
    ///
    /// Every failure is converted here; nothing propagates past this
    /// boundary and the server keeps serving subsequent invocations.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> CallToolResult {
        info!(tool = name, "tool invoked");

        let Some(tool) = self.registry.get(name) else {
            return failure_envelope(&YnabError::UnknownTool(name.to_string()));
        };

        match tool.execute(arguments).await {
            Ok(payload) => {
                let text = serde_json::to_string_pretty(&payload)
                    .unwrap_or_else(|_| payload.to_string());
                CallToolResult::success(text)
            }
            Err(err) => {
                error!(tool = name, error = %err, "tool failed");
                failure_envelope(&err)
            }
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "ynab-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Build the structured failure envelope returned for every error kind.
///
/// The text content is a stable JSON record so callers can recover both the
/// machine-readable kind and the upstream status when one exists:
/// `{"error": {"kind": "...", "message": "...", "status": 401}}`.
fn failure_envelope(err: &YnabError) -> CallToolResult {
    let kind = match err {
        YnabError::UnknownTool(_) => "unknown_tool",
        YnabError::InvalidArguments(_) => "invalid_arguments",
        YnabError::Api { .. } => "api",
        YnabError::Transport(_) => "transport",
        // Config, Json, InvalidUrl: nothing a caller can act on beyond the
        // message, so they collapse into the catch-all.
        _ => "internal",
    };

    let mut record = json!({
        "error": {
            "kind": kind,
            "message": err.to_string(),
        }
    });
    if let Some(status) = err.status() {
        record["error"]["status"] = json!(status);
    }

    CallToolResult::failure(record.to_string())
}

/// Smoke check used at startup: the request router only dispatches by the
/// registry, so an empty registry means a misassembled binary.
pub fn assert_catalog_nonempty(registry: &ToolRegistry) -> Result<()> {
    anyhow::ensure!(!registry.is_empty(), "no tools registered");
    Ok(())
}
