//! Video library tools.
//!
//! Movies and series are listed the same way; only the item type differs.

pub mod movies;
pub mod series;

pub use movies::ListMoviesTool;
pub use series::ListSeriesTool;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::common::{RECURSIVE, clamp_limit, config_gate, page_response, sort_params};
use crate::domains::jellyfin::{Field, ItemKind, JellyfinResult, QueryParams, SortKey};
use crate::domains::tools::context::ToolContext;

const MAX_LIMIT: i64 = 100;
const FIELDS: &[Field] = &[
    Field::Id,
    Field::Name,
    Field::Year,
    Field::Genre,
    Field::Overview,
];
const DESCENDING: &[SortKey] = &[SortKey::Added, SortKey::Year, SortKey::Rating];

/// Parameters shared by the movie and series listings.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VideoListParams {
    #[schemars(description = "Filter by genre name (optional)")]
    #[serde(default)]
    pub genre: String,

    #[schemars(description = "Sort order: name, added, year, or rating (default: added)")]
    #[serde(default = "default_sort")]
    pub sort: String,

    #[schemars(description = "Max results (1-100, default 50)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_sort() -> String {
    "added".to_string()
}

fn default_limit() -> i64 {
    50
}

/// List videos of one kind. Newest, latest and best-rated come first.
async fn list_videos(
    kind: ItemKind,
    params: &VideoListParams,
    ctx: &ToolContext,
) -> JellyfinResult<Value> {
    if let Some(rejection) = config_gate(ctx) {
        return Ok(rejection);
    }

    let limit = clamp_limit(params.limit, MAX_LIMIT);
    let (sort_by, sort_order) = sort_params(&params.sort, SortKey::Added, DESCENDING);
    info!(
        "Listing {} sorted by {} {}",
        kind.as_str(),
        sort_by,
        sort_order.as_str()
    );

    let query = QueryParams::new()
        .with("IncludeItemTypes", kind.as_str())
        .with("Recursive", RECURSIVE)
        .with("Limit", limit)
        .with("SortBy", sort_by)
        .with("SortOrder", sort_order.as_str())
        .with("Fields", "Genres,ProductionYear,Overview,CommunityRating")
        .with_non_empty("Genres", &params.genre);

    let body = ctx.api().get(&ctx.user_path("/Items"), &query).await?;
    page_response(body, FIELDS, ctx)
}
