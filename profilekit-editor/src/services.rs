//! Collaborators injected into the editor

use std::sync::Arc;

use profilekit_config::EditorConfig;
use profilekit_core::{ImageStore, Navigator, ProfileStore};

/// Everything the update handlers call out to
#[derive(Debug, Clone)]
pub struct EditorServices {
    pub profiles: Arc<dyn ProfileStore>,
    pub images: Arc<dyn ImageStore>,
    pub navigator: Arc<dyn Navigator>,
    pub config: EditorConfig,
}

impl EditorServices {
    /// Services with the default [`EditorConfig`]
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        images: Arc<dyn ImageStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            profiles,
            images,
            navigator,
            config: EditorConfig::default(),
        }
    }

    /// Use `config` instead of the defaults
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }
}
