//! Library search tool.
//!
//! Full-text search over one item type. The fields returned depend on the
//! type searched for.

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
};
use crate::domains::jellyfin::{Field, ItemKind, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 50;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchMediaParams {
    /// Search term (title, artist, album name).
    #[schemars(description = "Search term (title, artist, album name)")]
    pub query: String,

    /// Item type to search for.
    #[schemars(description = "Item type: Audio, MusicAlbum, MusicArtist, Movie, or Series (default: Audio)")]
    #[serde(rename = "type", default = "default_type")]
    pub item_type: String,

    /// Maximum number of results.
    #[schemars(description = "Max results (1-50, default 20)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_type() -> String {
    ItemKind::Audio.as_str().to_string()
}

fn default_limit() -> i64 {
    20
}

/// Fields returned for each searched item type.
fn fields_for(kind: Option<ItemKind>) -> &'static [Field] {
    use Field::*;
    match kind {
        Some(ItemKind::Audio) => &[Id, Name, Artist, Album, Year, Duration, ApiStream],
        Some(ItemKind::MusicAlbum) => &[Id, Name, AlbumArtist, Year, Genre],
        Some(ItemKind::MusicArtist) => &[Id, Name, Genre, Overview],
        Some(ItemKind::Movie | ItemKind::Series) => &[Id, Name, Year, Genre, Overview],
        None => &[Id, Name, Type, Year],
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search tool - free-text search across the library.
pub struct SearchMediaTool;

impl SearchMediaTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_media";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the Jellyfin media library by title, artist or album name. \
         Returns {total, items} with compact items; songs include a direct api_stream URL.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query, item_type = %params.item_type))]
    pub async fn execute(params: &SearchMediaParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let limit = clamp_limit(params.limit, MAX_LIMIT);
        info!("Searching for '{}' ({}, limit {})", params.query, params.item_type, limit);

        let query = QueryParams::new()
            .with("searchTerm", &params.query)
            .with("IncludeItemTypes", &params.item_type)
            .with("Recursive", RECURSIVE)
            .with("Limit", limit)
            .with(
                "Fields",
                "Genres,Artists,AlbumArtist,Album,ProductionYear,RunTimeTicks",
            );

        let body = ctx.api().get("/Items", &query).await?;
        page_response(body, fields_for(ItemKind::parse(&params.item_type)), ctx)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchMediaParams>(),
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
                let params: SearchMediaParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
