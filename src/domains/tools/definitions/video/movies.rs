//! Movie listing tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use serde_json::Value;
use tracing::instrument;

use super::super::common::{into_call_result, parse_arguments};
use super::{VideoListParams, list_videos};
use crate::domains::jellyfin::{ItemKind, JellyfinResult};
use crate::domains::tools::context::ToolContext;

/// Movie listing tool.
pub struct ListMoviesTool;

impl ListMoviesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_movies";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List movies in the library, optionally filtered by genre. \
         Sort by added, year or rating (newest/best first) or by name (A-Z).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(sort = %params.sort, limit = params.limit))]
    pub async fn execute(params: &VideoListParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        list_videos(ItemKind::Movie, params, ctx).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VideoListParams>(),
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
                let params: VideoListParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
