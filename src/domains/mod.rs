//! Domains module containing business logic organized by bounded contexts.
//!
//! - **jellyfin**: the upstream media server API and response projection
//! - **tools**: MCP tools that can be executed by clients

pub mod jellyfin;
pub mod tools;
