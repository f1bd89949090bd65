//! Library statistics tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use super::super::common::{config_gate, into_call_result, parse_arguments};
use crate::domains::jellyfin::{ItemCounts, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

/// The statistics tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LibraryStatsParams {}

/// Item counts per media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub songs: u64,
    pub albums: u64,
    pub artists: u64,
    pub movies: u64,
    pub series: u64,
    pub episodes: u64,
}

impl From<ItemCounts> for LibraryStats {
    fn from(counts: ItemCounts) -> Self {
        Self {
            songs: counts.song_count.unwrap_or(0),
            albums: counts.album_count.unwrap_or(0),
            artists: counts.artist_count.unwrap_or(0),
            movies: counts.movie_count.unwrap_or(0),
            series: counts.series_count.unwrap_or(0),
            episodes: counts.episode_count.unwrap_or(0),
        }
    }
}

/// Library statistics tool - item counts per media kind.
pub struct LibraryStatsTool;

impl LibraryStatsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "library_stats";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get library statistics: counts of songs, albums, artists, movies, series and episodes.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &LibraryStatsParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let body = ctx.api().get("/Items/Counts", &QueryParams::new()).await?;
        let counts: ItemCounts = serde_json::from_value(body)?;
        Ok(serde_json::to_value(LibraryStats::from(counts))?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LibraryStatsParams>(),
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
                let params: LibraryStatsParams = parse_arguments(args)?;
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

    use crate::domains::tools::definitions::test_support::{context_with, unconfigured_context};

    #[tokio::test]
    async fn test_returns_counts() {
        let (ctx, api) = context_with(json!({
            "SongCount": 1234,
            "AlbumCount": 89,
            "ArtistCount": 45,
            "MovieCount": 67,
            "SeriesCount": 12,
            "EpisodeCount": 234,
            "BookCount": 3,
        }));

        let result = LibraryStatsTool::execute(&LibraryStatsParams::default(), &ctx)
            .await
            .unwrap();
        assert_eq!(
            result,
            json!({
                "songs": 1234,
                "albums": 89,
                "artists": 45,
                "movies": 67,
                "series": 12,
                "episodes": 234,
            })
        );
        assert_eq!(api.only_call().path, "/Items/Counts");
    }

    #[tokio::test]
    async fn test_missing_counts_default_to_zero() {
        let (ctx, _api) = context_with(json!({"SongCount": 5}));

        let result = LibraryStatsTool::execute(&LibraryStatsParams::default(), &ctx)
            .await
            .unwrap();
        assert_eq!(result["songs"], 5);
        assert_eq!(result["episodes"], 0);
        assert_eq!(result["movies"], 0);
    }

    #[test]
    fn test_stats_stay_small() {
        let stats = LibraryStats {
            songs: 12345,
            albums: 890,
            artists: 456,
            movies: 678,
            series: 123,
            episodes: 2345,
        };
        assert!(serde_json::to_vec(&stats).unwrap().len() < 200);
    }

    #[tokio::test]
    async fn test_missing_config() {
        let (ctx, api) = unconfigured_context();
        let result = LibraryStatsTool::execute(&LibraryStatsParams::default(), &ctx)
            .await
            .unwrap();
        assert!(result["error"].as_str().unwrap().contains("not configured"));
        assert!(api.calls().is_empty());
    }
}
