use std::sync::Arc;

use crate::config::ServeConfig;

/// Shared, read-only server state. Uploads are never stored here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServeConfig>,
}

impl AppState {
    pub fn new(config: ServeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn max_upload_mb(&self) -> usize {
        self.config.max_upload_bytes / (1024 * 1024)
    }
}
