//! Artist listing tool.

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
    clamp_limit, config_gate, into_call_result, page_response, parse_arguments,
};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 200;
const FIELDS: &[Field] = &[Field::Id, Field::Name, Field::Genre, Field::Overview];

/// Parameters for the artist listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListArtistsParams {
    #[schemars(description = "Max results (1-200, default 50)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Artist listing tool.
pub struct ListArtistsTool;

impl ListArtistsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_artists";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all music artists in the library with their main genre and biography.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit))]
    pub async fn execute(params: &ListArtistsParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new()
            .with("Limit", clamp_limit(params.limit, MAX_LIMIT))
            .with("Fields", "Genres,Overview");

        let body = ctx.api().get("/Artists", &query).await?;
        page_response(body, FIELDS, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListArtistsParams>(),
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
                let params: ListArtistsParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domains::tools::definitions::test_support::context_with;

    #[tokio::test]
    async fn test_basic() {
        let (ctx, api) = context_with(json!({
            "TotalRecordCount": 2,
            "Items": [
                {"Id": "ar1", "Name": "Queen", "Genres": ["Rock"]},
                {"Id": "ar2", "Name": "Mozart", "Genres": ["Classical"]},
            ],
        }));
        let params = ListArtistsParams { limit: 50 };

        let result = ListArtistsTool::execute(&params, &ctx).await.unwrap();
        assert_eq!(result["total"], 2);
        assert_eq!(result["items"][1], json!({"id": "ar2", "name": "Mozart", "genre": "Classical"}));
        assert_eq!(api.only_call().path, "/Artists");
    }

    #[tokio::test]
    async fn test_limit_clamped() {
        let (ctx, api) = context_with(json!({"TotalRecordCount": 0, "Items": []}));
        let params = ListArtistsParams { limit: 500 };

        ListArtistsTool::execute(&params, &ctx).await.unwrap();
        assert_eq!(api.only_call().query.get("Limit"), Some("200"));
    }
}
