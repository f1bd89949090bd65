//! Helpers shared by the Jellyfin tools.
//!
//! Limit clamping, sort selection, envelope building and the conversion of
//! tool outcomes into MCP results.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::domains::jellyfin::{Field, ItemsPage, JellyfinResult, SortKey, SortOrder, project_all};
use crate::domains::tools::context::ToolContext;

/// `Recursive` flag value for library-wide queries.
pub const RECURSIVE: &str = "true";

/// Clamp a requested page size into `1..=max`.
pub fn clamp_limit(limit: i64, max: i64) -> i64 {
    limit.clamp(1, max)
}

/// Resolve a tool-level sort name to Jellyfin's `SortBy`/`SortOrder` pair.
///
/// Unknown names use `fallback` ascending. Known names listed in `descending`
/// sort descending, every other known name ascending.
pub fn sort_params(
    sort: &str,
    fallback: SortKey,
    descending: &[SortKey],
) -> (&'static str, SortOrder) {
    let key = SortKey::parse(sort);
    let field = key.unwrap_or(fallback).sort_field();
    let order = if key.is_some_and(|k| descending.contains(&k)) {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    (field, order)
}

/// Run the configuration gate.
///
/// Returns the `{"error": ...}` response to hand back when settings are
/// incomplete; no request must be made in that case.
pub fn config_gate(ctx: &ToolContext) -> Option<Value> {
    match ctx.check() {
        Ok(()) => None,
        Err(missing) => {
            warn!("Tool call rejected: {}", missing);
            Some(missing.to_response())
        }
    }
}

/// Build the `{total, items}` envelope.
pub fn list_response(total: u64, items: Vec<Value>) -> Value {
    json!({ "total": total, "items": items })
}

/// Decode an `{Items, TotalRecordCount}` payload and project its items.
pub fn page_response(body: Value, fields: &[Field], ctx: &ToolContext) -> JellyfinResult<Value> {
    let page: ItemsPage = serde_json::from_value(body)?;
    let items = project_all(page.items(), fields, ctx.jellyfin());
    Ok(list_response(page.total(), items))
}

/// Decode tool arguments into a parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create a success result carrying a JSON payload.
///
/// The payload is sent both as text content and as structured content.
pub fn structured_result(value: Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(value.to_string())],
        structured_content: Some(value),
        is_error: Some(false),
        meta: None,
    }
}

/// Convert a tool outcome into the rmcp route result.
///
/// Upstream failures fail the call; they are not turned into tool output.
pub fn into_call_result(outcome: JellyfinResult<Value>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => Ok(structured_result(value)),
        Err(e) => {
            error!("Jellyfin request failed: {}", e);
            Err(McpError::internal_error(e.to_string(), None))
        }
    }
}
