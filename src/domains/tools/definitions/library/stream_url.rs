//! Stream URL lookup tool.
//!
//! Returns a single projected object rather than a `{total, items}` envelope.

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

use super::super::common::{config_gate, into_call_result, parse_arguments};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams, project};
use crate::domains::tools::context::ToolContext;

const FIELDS: &[Field] = &[
    Field::Id,
    Field::Name,
    Field::StreamUrl,
    Field::Container,
    Field::ApiStream,
];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetStreamUrlParams {
    #[schemars(description = "Jellyfin item ID")]
    pub item_id: String,
}

/// Stream URL tool - file path and playable HTTP URL of one item.
pub struct GetStreamUrlTool;

impl GetStreamUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_stream_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the streaming URLs and container format for a media item: \
         the server-side file path (stream_url) and a ready-to-play HTTP URL (api_stream).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(item_id = %params.item_id))]
    pub async fn execute(params: &GetStreamUrlParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new().with("Fields", "MediaSources,Path");
        let path = ctx.user_path(&format!("/Items/{}", params.item_id));

        let item = ctx.api().get(&path, &query).await?;
        Ok(Value::Object(project(&item, FIELDS, ctx.jellyfin())))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetStreamUrlParams>(),
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
                let params: GetStreamUrlParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
