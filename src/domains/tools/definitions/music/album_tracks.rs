//! Album track listing tool.

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

use super::super::common::{config_gate, into_call_result, page_response, parse_arguments};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

const FIELDS: &[Field] = &[
    Field::Id,
    Field::Name,
    Field::Index,
    Field::Artist,
    Field::Duration,
    Field::ApiStream,
];

/// Parameters for the album tracks tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAlbumTracksParams {
    #[schemars(description = "Jellyfin album ID")]
    pub album_id: String,
}

/// Album tracks tool - tracks of one album in disc order.
pub struct GetAlbumTracksTool;

impl GetAlbumTracksTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_album_tracks";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all tracks of a specific album in track order, with durations and direct api_stream URLs.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(album_id = %params.album_id))]
    pub async fn execute(params: &GetAlbumTracksParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new()
            .with("ParentId", &params.album_id)
            .with("IncludeItemTypes", "Audio")
            .with("SortBy", "IndexNumber")
            .with("Fields", "Artists,Album,RunTimeTicks");

        let body = ctx.api().get(&ctx.user_path("/Items"), &query).await?;
        page_response(body, FIELDS, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAlbumTracksParams>(),
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
                let params: GetAlbumTracksParams = parse_arguments(args)?;
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
    async fn test_returns_tracks() {
        let (ctx, api) = context_with(json!({
            "TotalRecordCount": 3,
            "Items": [
                {"Id": "t1", "Name": "Track 1", "IndexNumber": 1, "Artists": ["Queen"], "RunTimeTicks": 2_100_000_000i64},
                {"Id": "t2", "Name": "Track 2", "IndexNumber": 2, "Artists": ["Queen"], "RunTimeTicks": 3_300_000_000i64},
                {"Id": "t3", "Name": "Track 3", "IndexNumber": 3, "Artists": ["Queen"], "RunTimeTicks": 1_500_000_000i64},
            ],
        }));
        let params = GetAlbumTracksParams {
            album_id: "album-id-123".to_string(),
        };

        let result = GetAlbumTracksTool::execute(&params, &ctx).await.unwrap();
        assert_eq!(result["total"], 3);
        assert_eq!(result["items"][0]["index"], 1);
        assert_eq!(result["items"][0]["duration"], "3:30");
        assert!(result["items"][0]["api_stream"].as_str().unwrap().contains("/Audio/t1/"));

        let call = api.only_call();
        assert_eq!(call.path, "/Users/test-user-id/Items");
        assert_eq!(call.query.get("ParentId"), Some("album-id-123"));
        assert_eq!(call.query.get("SortBy"), Some("IndexNumber"));
    }

    #[test]
    fn test_album_id_required() {
        assert!(serde_json::from_value::<GetAlbumTracksParams>(json!({})).is_err());
    }
}
