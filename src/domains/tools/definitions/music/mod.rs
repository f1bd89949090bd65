//! Music library tools.
//!
//! - `search`: free-text search over one item type
//! - `albums`, `artists`, `genres`, `playlists`: library listings
//! - `album_tracks`, `artist_albums`: drill-down by id
//! - `recent`, `favorites`: personalised views

pub mod album_tracks;
pub mod albums;
pub mod artist_albums;
pub mod artists;
pub mod favorites;
pub mod genres;
pub mod playlists;
pub mod recent;
pub mod search;

pub use album_tracks::{GetAlbumTracksParams, GetAlbumTracksTool};
pub use albums::{ListAlbumsParams, ListAlbumsTool};
pub use artist_albums::{GetArtistAlbumsParams, GetArtistAlbumsTool};
pub use artists::{ListArtistsParams, ListArtistsTool};
pub use favorites::{GetFavoritesParams, GetFavoritesTool};
pub use genres::{ListGenresParams, ListGenresTool};
pub use playlists::{GetPlaylistsParams, GetPlaylistsTool};
pub use recent::{GetRecentParams, GetRecentTool};
pub use search::{SearchMediaParams, SearchMediaTool};
