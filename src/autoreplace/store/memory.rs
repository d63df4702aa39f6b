use super::ConfigStore;
use crate::config::AutoreplaceConfig;
use crate::error::Result;

/// In-memory store for tests. Holds at most one saved record, like the
/// single-file production store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<AutoreplaceConfig>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-persisted record, as if a previous session saved it.
    pub fn with_config(config: AutoreplaceConfig) -> Self {
        Self {
            saved: Some(config),
        }
    }

    pub fn saved(&self) -> Option<&AutoreplaceConfig> {
        self.saved.as_ref()
    }
}

impl ConfigStore for InMemoryStore {
    fn load(&self) -> Result<AutoreplaceConfig> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, config: &AutoreplaceConfig) -> Result<()> {
        self.saved = Some(config.clone());
        Ok(())
    }
}
