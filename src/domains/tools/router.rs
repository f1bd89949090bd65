//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{
    GetAlbumTracksTool, GetArtistAlbumsTool, GetFavoritesTool, GetPlaylistsTool, GetRecentTool,
    GetStreamUrlTool, LibraryStatsTool, ListAlbumsTool, ListArtistsTool, ListGenresTool,
    ListMoviesTool, ListSeriesTool, SearchMediaTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchMediaTool::create_route(ctx.clone()))
        .with_route(ListAlbumsTool::create_route(ctx.clone()))
        .with_route(ListArtistsTool::create_route(ctx.clone()))
        .with_route(GetAlbumTracksTool::create_route(ctx.clone()))
        .with_route(GetArtistAlbumsTool::create_route(ctx.clone()))
        .with_route(ListGenresTool::create_route(ctx.clone()))
        .with_route(GetRecentTool::create_route(ctx.clone()))
        .with_route(GetFavoritesTool::create_route(ctx.clone()))
        .with_route(GetPlaylistsTool::create_route(ctx.clone()))
        .with_route(ListMoviesTool::create_route(ctx.clone()))
        .with_route(ListSeriesTool::create_route(ctx.clone()))
        .with_route(GetStreamUrlTool::create_route(ctx.clone()))
        .with_route(LibraryStatsTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::tools::definitions::test_support::context_with;

    struct TestServer {}

    fn test_context() -> Arc<ToolContext> {
        Arc::new(context_with(serde_json::json!({})).0)
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 13);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_media"));
        assert!(names.contains(&"get_recent"));
        assert!(names.contains(&"list_series"));
        assert!(names.contains(&"library_stats"));
    }

    #[test]
    fn test_every_tool_has_description() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        for tool in router.list_all() {
            assert!(
                tool.description.as_deref().is_some_and(|d| !d.is_empty()),
                "{} has no description",
                tool.name
            );
        }
    }

    #[test]
    fn test_registry_matches_router() {
        let ctx = test_context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
