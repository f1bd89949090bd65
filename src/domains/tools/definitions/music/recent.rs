//! Recently added items tool.
//!
//! `/Users/{id}/Items/Latest` answers with a bare array, so `total` is the
//! number of items returned rather than a server-side count.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::super::common::{
    clamp_limit, config_gate, into_call_result, list_response, parse_arguments,
};
use crate::domains::jellyfin::{Field, ItemKind, JellyfinResult, LatestItems, QueryParams, project_all};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 50;

/// Parameters for the recently added tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRecentParams {
    #[schemars(description = "Item type: MusicAlbum, Audio, Movie, Series (default: MusicAlbum)")]
    #[serde(rename = "type", default = "default_type")]
    pub item_type: String,

    #[schemars(description = "Max results (1-50, default 20)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_type() -> String {
    ItemKind::MusicAlbum.as_str().to_string()
}

fn default_limit() -> i64 {
    20
}

fn fields_for(kind: Option<ItemKind>) -> &'static [Field] {
    use Field::*;
    match kind {
        Some(ItemKind::Audio) => &[Id, Name, Artist, Album, Year],
        Some(ItemKind::MusicAlbum) => &[Id, Name, AlbumArtist, Year, Genre],
        Some(ItemKind::Movie | ItemKind::Series) => &[Id, Name, Year, Genre],
        Some(ItemKind::MusicArtist) | None => &[Id, Name, Type, Year],
    }
}

/// Recently added tool - newest items of one type.
pub struct GetRecentTool;

impl GetRecentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_recent";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get recently added items of one type (albums by default), newest first.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(item_type = %params.item_type, limit = params.limit))]
    pub async fn execute(params: &GetRecentParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new()
            .with("IncludeItemTypes", &params.item_type)
            .with("Limit", clamp_limit(params.limit, MAX_LIMIT))
            .with("Fields", "Genres,Artists,AlbumArtist,Album,ProductionYear");

        let body = ctx.api().get(&ctx.user_path("/Items/Latest"), &query).await?;
        let raw_items = serde_json::from_value::<LatestItems>(body)?.into_items();
        debug!("Latest returned {} items", raw_items.len());

        let fields = fields_for(ItemKind::parse(&params.item_type));
        let items = project_all(&raw_items, fields, ctx.jellyfin());
        Ok(list_response(items.len() as u64, items))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetRecentParams>(),
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
                let params: GetRecentParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
