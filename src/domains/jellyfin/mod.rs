//! Jellyfin domain module.
//!
//! Everything that knows about the upstream media server lives here:
//!
//! - `client.rs` - the `MediaApi` seam and its `reqwest` implementation
//! - `model.rs` - response envelopes, item kinds and sort keys
//! - `projection.rs` - reduction of raw items to compact output objects
//! - `error.rs` - upstream error types

mod client;
mod error;
pub mod model;
pub mod projection;

pub use client::{JellyfinClient, MediaApi, QueryParams, REQUEST_TIMEOUT_SECS};
pub use error::{JellyfinError, JellyfinResult};
pub use model::{ItemCounts, ItemKind, ItemsPage, LatestItems, SortKey, SortOrder};
pub use projection::{Field, format_duration, format_item, project, project_all};
