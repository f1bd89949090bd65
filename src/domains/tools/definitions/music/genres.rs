//! Music genre listing tool.
//!
//! Genres are reported as plain `{id, name}` pairs taken straight from the
//! payload, without going through the field projection.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::super::common::{config_gate, into_call_result, list_response, parse_arguments};
use crate::domains::jellyfin::{ItemsPage, JellyfinResult, QueryParams};
use crate::domains::tools::context::ToolContext;

const GENRE_LIMIT: i64 = 50;

/// The genre tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGenresParams {}

/// Genre listing tool.
pub struct ListGenresTool;

impl ListGenresTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_genres";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all music genres in the library.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(_params: &ListGenresParams, ctx: &ToolContext) -> JellyfinResult<Value> {
        if let Some(rejection) = config_gate(ctx) {
            return Ok(rejection);
        }

        let query = QueryParams::new().with("Limit", GENRE_LIMIT);
        let body = ctx.api().get("/MusicGenres", &query).await?;

        let page: ItemsPage = serde_json::from_value(body)?;
        let items = page
            .items()
            .iter()
            .map(|genre| json!({ "id": genre.get("Id"), "name": genre.get("Name") }))
            .collect();
        Ok(list_response(page.total(), items))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListGenresParams>(),
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
                let params: ListGenresParams = parse_arguments(args)?;
                into_call_result(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domains::tools::definitions::test_support::context_with;

    #[tokio::test]
    async fn test_returns_genres() {
        let (ctx, api) = context_with(json!({
            "TotalRecordCount": 3,
            "Items": [
                {"Id": "g1", "Name": "Rock", "Type": "MusicGenre"},
                {"Id": "g2", "Name": "Jazz"},
                {"Id": "g3", "Name": "Classical"},
            ],
        }));

        let result = ListGenresTool::execute(&ListGenresParams::default(), &ctx)
            .await
            .unwrap();
        assert_eq!(result["total"], 3);
        assert_eq!(result["items"][0], json!({"id": "g1", "name": "Rock"}));
        let names: Vec<_> = result["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Rock", "Jazz", "Classical"]);

        let call = api.only_call();
        assert_eq!(call.path, "/MusicGenres");
        assert_eq!(call.query.get("Limit"), Some("50"));
    }
}
