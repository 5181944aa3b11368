use crate::config::{CanaryConfig, Variant};

/// Shared application state passed to every handler via axum `State`.
/// Read-once at startup, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub variant: Variant,
    pub version: String,
}

impl AppState {
    pub fn from_config(config: &CanaryConfig) -> Self {
        Self {
            variant: config.variant,
            version: config.version.clone(),
        }
    }
}
