//! Tools domain module.
//!
//! Every tool translates into exactly one GET against the Jellyfin API and
//! reduces the answer to a compact JSON object.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `context.rs` - Shared per-server state handed to every tool
//! - `router.rs` - ToolRouter builder for the rmcp server
//! - `registry.rs` - Tool listing and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()` and
//!    `create_route()`
//! 2. Export it in the matching `mod.rs`
//! 3. Add its route in `router.rs`
//! 4. Add it to `registry.rs`

pub mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
