//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by area:
//! - `music`: songs, albums, artists, genres, playlists
//! - `video`: movies and series
//! - `library`: stream URLs and statistics

pub mod common;
pub mod library;
pub mod music;
pub mod video;

pub use library::{GetStreamUrlTool, LibraryStatsTool};
pub use music::{
    GetAlbumTracksTool, GetArtistAlbumsTool, GetFavoritesTool, GetPlaylistsTool, GetRecentTool,
    ListAlbumsTool, ListArtistsTool, ListGenresTool, SearchMediaTool,
};
pub use video::{ListMoviesTool, ListSeriesTool, VideoListParams};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use serde_json::Value;

    use crate::core::config::JellyfinConfig;
    use crate::domains::jellyfin::fake::FakeApi;
    use crate::domains::tools::context::ToolContext;

    pub fn jellyfin() -> JellyfinConfig {
        JellyfinConfig::new("http://jellyfin.local:8096", "test-api-key", "test-user-id")
    }

    /// Fully configured context whose API replays `response`.
    pub fn context_with(response: Value) -> (ToolContext, Arc<FakeApi>) {
        let api = Arc::new(FakeApi::returning(response));
        (ToolContext::new(jellyfin(), api.clone()), api)
    }

    /// Context with no Jellyfin settings at all.
    pub fn unconfigured_context() -> (ToolContext, Arc<FakeApi>) {
        let api = Arc::new(FakeApi::returning(Value::Null));
        (ToolContext::new(JellyfinConfig::default(), api.clone()), api)
    }
}
