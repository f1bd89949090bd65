//! Per-server context shared by every tool invocation.

use std::sync::Arc;

use crate::core::config::{JellyfinConfig, MissingSetting};
use crate::domains::jellyfin::{JellyfinClient, JellyfinResult, MediaApi};

/// Read-only state handed to each tool: connection settings and the API seam.
///
/// Nothing in here is mutated after construction, so concurrent tool calls
/// share it freely.
#[derive(Clone)]
pub struct ToolContext {
    jellyfin: JellyfinConfig,
    api: Arc<dyn MediaApi>,
}

impl ToolContext {
    /// Build a context around an arbitrary `MediaApi` implementation.
    pub fn new(jellyfin: JellyfinConfig, api: Arc<dyn MediaApi>) -> Self {
        Self { jellyfin, api }
    }

    /// Build a context backed by a real Jellyfin HTTP client.
    pub fn connect(jellyfin: JellyfinConfig) -> JellyfinResult<Self> {
        let client = JellyfinClient::new(&jellyfin)?;
        Ok(Self::new(jellyfin, Arc::new(client)))
    }

    pub fn jellyfin(&self) -> &JellyfinConfig {
        &self.jellyfin
    }

    pub fn api(&self) -> &dyn MediaApi {
        self.api.as_ref()
    }

    /// Run the configuration gate.
    pub fn check(&self) -> Result<(), MissingSetting> {
        self.jellyfin.check()
    }

    /// Path scoped to the configured user, e.g. `/Users/{id}/Items`.
    pub fn user_path(&self, suffix: &str) -> String {
        format!("/Users/{}{}", self.jellyfin.user_id, suffix)
    }
}
