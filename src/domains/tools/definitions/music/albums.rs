//! Album listing tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::super::common::{
    RECURSIVE, clamp_limit, config_gate, into_call_result, page_response, parse_arguments,
    sort_params,
};
use crate::domains::jellyfin::{Field, JellyfinResult, QueryParams, SortKey};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 100;
const FIELDS: &[Field] = &[
    Field::Id,
    Field::Name,
    Field::AlbumArtist,
    Field::Year,
    Field::Genre,
];

/// Parameters for the album listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListAlbumsParams {
    #[schemars(description = "Filter by artist name (optional)")]
    #[serde(default)]
    pub artist: String,

    #[schemars(description = "Filter by genre name (optional)")]
    #[serde(default)]
    pub genre: String,

    #[schemars(description = "Sort order: name, added, year, or random (default: name)")]
    #[serde(default = "default_sort")]
    pub sort: String,

    #[schemars(description = "Max results (1-100, default 50)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_limit() -> i64 {
    50
}

/// Album listing tool - browse music albums with optional filters.
pub struct ListAlbumsTool;

impl ListAlbumsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_albums";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List music albums in the library, optionally filtered by artist or genre. \
         Sort by name (A-Z), added or year (newest first), or random.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(sort = %params.sort, limit = params.limit))]
    pub async fn execute(params: &ListAlbumsParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let limit = clamp_limit(params.limit, MAX_LIMIT);
        let (sort_by, sort_order) =
            sort_params(&params.sort, SortKey::Name, &[SortKey::Added, SortKey::Year]);
        info!("Listing albums sorted by {} {}", sort_by, sort_order.as_str());

        let query = QueryParams::new()
            .with("IncludeItemTypes", "MusicAlbum")
            .with("Recursive", RECURSIVE)
            .with("Limit", limit)
            .with("SortBy", sort_by)
            .with("SortOrder", sort_order.as_str())
            .with("Fields", "Genres,Artists,AlbumArtist,ProductionYear")
            .with_non_empty("Artists", &params.artist)
            .with_non_empty("Genres", &params.genre);

        let body = ctx.api().get(&ctx.user_path("/Items"), &query).await?;
        page_response(body, FIELDS, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAlbumsParams>(),
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
                let params: ListAlbumsParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
