use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use ts_rs::TS;

/// Host-side bridge policy.
///
/// The wire contract itself has no deadline: an invocation that never
/// completes leaves its caller suspended forever. The host can close that
/// hole here; the default keeps the fire-and-forget shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct BridgeSettings {
    /// Per-invocation deadline in milliseconds. `None` means wait forever.
    pub invoke_timeout_ms: Option<u64>,
}

impl BridgeSettings {
    pub fn invoke_timeout(&self) -> Option<Duration> {
        self.invoke_timeout_ms.map(Duration::from_millis)
    }

    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub async fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid bridge settings, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "bridge settings not readable, using defaults");
                Self::default()
            }
        }
    }
}
