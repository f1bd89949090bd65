//! Artist discography tool.

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
    RECURSIVE, config_gate, into_call_result, page_response, parse_arguments,
};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams, SortKey, SortOrder};
use crate::domains::tools::context::ToolContext;

const FIELDS: &[Field] = &[Field::Id, Field::Name, Field::Year, Field::Genre];

/// Parameters for the artist albums tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetArtistAlbumsParams {
    #[schemars(description = "Jellyfin artist ID")]
    pub artist_id: String,
}

/// Artist albums tool - newest releases first.
pub struct GetArtistAlbumsTool;

impl GetArtistAlbumsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_artist_albums";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all albums by a specific artist, newest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(artist_id = %params.artist_id))]
    pub async fn execute(params: &GetArtistAlbumsParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new()
            .with("ArtistIds", &params.artist_id)
            .with("IncludeItemTypes", "MusicAlbum")
            .with("Recursive", RECURSIVE)
            .with("SortBy", SortKey::Year.sort_field())
            .with("SortOrder", SortOrder::Descending.as_str())
            .with("Fields", "Genres,ProductionYear");

        let body = ctx.api().get(&ctx.user_path("/Items"), &query).await?;
        page_response(body, FIELDS, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetArtistAlbumsParams>(),
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
                let params: GetArtistAlbumsParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
