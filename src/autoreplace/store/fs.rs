use super::ConfigStore;
use crate::config::AutoreplaceConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Production store: the configuration record as a JSON file under a
/// config directory.
pub struct FileStore {
    config_dir: PathBuf,
}

impl FileStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<AutoreplaceConfig> {
        Ok(AutoreplaceConfig::load(&self.config_dir))
    }

    fn save(&mut self, config: &AutoreplaceConfig) -> Result<()> {
        config.save(&self.config_dir)
    }
}
