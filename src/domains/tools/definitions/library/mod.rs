//! Library utility tools: stream URL lookup and library statistics.

pub mod stats;
pub mod stream_url;

pub use stats::{LibraryStats, LibraryStatsParams, LibraryStatsTool};
pub use stream_url::{GetStreamUrlParams, GetStreamUrlTool};
