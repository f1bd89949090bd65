//! Playlist listing tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::super::common::{
    RECURSIVE, clamp_limit, config_gate, into_call_result, page_response, parse_arguments,
};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 100;
const FIELDS: &[Field] = &[Field::Id, Field::Name, Field::ChildCount, Field::Overview];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPlaylistsParams {
    #[schemars(description = "Max results (1-100, default 30)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    30
}

/// Playlist listing tool.
pub struct GetPlaylistsTool;

impl GetPlaylistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_playlists";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all playlists in the library with their item counts.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit))]
    pub async fn execute(params: &GetPlaylistsParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new()
            .with("IncludeItemTypes", "Playlist")
            .with("Recursive", RECURSIVE)
            .with("Limit", clamp_limit(params.limit, MAX_LIMIT))
            .with("Fields", "ChildCount,Overview");

        let body = ctx.api().get(&ctx.user_path("/Items"), &query).await?;
        page_response(body, FIELDS, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPlaylistsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(ctx: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                let params: GetPlaylistsParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
