//! Tool Registry - listing and name-based dispatch for all tools.
//!
//! The rmcp router handles protocol calls; the registry offers the same tools
//! to callers that only have a tool name and a JSON argument object.

use std::sync::Arc;

use rmcp::model::Tool;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::context::ToolContext;
use super::definitions::{
    GetAlbumTracksTool, GetArtistAlbumsTool, GetFavoritesTool, GetPlaylistsTool, GetRecentTool,
    GetStreamUrlTool, LibraryStatsTool, ListAlbumsTool, ListArtistsTool, ListGenresTool,
    ListMoviesTool, ListSeriesTool, SearchMediaTool,
};
use super::error::ToolError;

pub struct ToolRegistry {
    ctx: Arc<ToolContext>,
}

impl ToolRegistry {
    pub fn new(ctx: Arc<ToolContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchMediaTool::NAME,
            ListAlbumsTool::NAME,
            ListArtistsTool::NAME,
            GetAlbumTracksTool::NAME,
            GetArtistAlbumsTool::NAME,
            ListGenresTool::NAME,
            GetRecentTool::NAME,
            GetFavoritesTool::NAME,
            GetPlaylistsTool::NAME,
            ListMoviesTool::NAME,
            ListSeriesTool::NAME,
            GetStreamUrlTool::NAME,
            LibraryStatsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchMediaTool::to_tool(),
            ListAlbumsTool::to_tool(),
            ListArtistsTool::to_tool(),
            GetAlbumTracksTool::to_tool(),
            GetArtistAlbumsTool::to_tool(),
            ListGenresTool::to_tool(),
            GetRecentTool::to_tool(),
            GetFavoritesTool::to_tool(),
            GetPlaylistsTool::to_tool(),
            ListMoviesTool::to_tool(),
            ListSeriesTool::to_tool(),
            GetStreamUrlTool::to_tool(),
            LibraryStatsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// A `null` argument value is treated as an empty object. Unknown names
    /// fail with [`ToolError::NotFound`].
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let ctx = self.ctx.as_ref();
        debug!("Dispatching tool call: {}", name);

        let result = match name {
            SearchMediaTool::NAME => SearchMediaTool::execute(&parse(arguments)?, ctx).await?,
            ListAlbumsTool::NAME => ListAlbumsTool::execute(&parse(arguments)?, ctx).await?,
            ListArtistsTool::NAME => ListArtistsTool::execute(&parse(arguments)?, ctx).await?,
            GetAlbumTracksTool::NAME => {
                GetAlbumTracksTool::execute(&parse(arguments)?, ctx).await?
            }
            GetArtistAlbumsTool::NAME => {
                GetArtistAlbumsTool::execute(&parse(arguments)?, ctx).await?
            }
            ListGenresTool::NAME => ListGenresTool::execute(&parse(arguments)?, ctx).await?,
            GetRecentTool::NAME => GetRecentTool::execute(&parse(arguments)?, ctx).await?,
            GetFavoritesTool::NAME => GetFavoritesTool::execute(&parse(arguments)?, ctx).await?,
            GetPlaylistsTool::NAME => GetPlaylistsTool::execute(&parse(arguments)?, ctx).await?,
            ListMoviesTool::NAME => ListMoviesTool::execute(&parse(arguments)?, ctx).await?,
            ListSeriesTool::NAME => ListSeriesTool::execute(&parse(arguments)?, ctx).await?,
            GetStreamUrlTool::NAME => GetStreamUrlTool::execute(&parse(arguments)?, ctx).await?,
            LibraryStatsTool::NAME => LibraryStatsTool::execute(&parse(arguments)?, ctx).await?,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        Ok(result)
    }
}

fn parse<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
