use crate::error::{AutoreplaceError, Result};
use crate::model::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Persisted settings for autoreplace, stored as config.json in the config
/// directory.
///
/// The default list holds a single placeholder pattern (empty source and
/// replacement), matching the shape historical configuration blobs were
/// written with. Placeholder rows carry no behavior; [`Pattern::is_active`]
/// filters them before the engine runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoreplaceConfig {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<Pattern>,
}

fn default_patterns() -> Vec<Pattern> {
    vec![Pattern::new("", "")]
}

impl Default for AutoreplaceConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

impl AutoreplaceConfig {
    /// Merge a raw persisted blob over the defaults, field by field.
    ///
    /// Never fails: a missing or ill-typed `patterns` field keeps the
    /// default, rows that are not objects are dropped, and rows missing a
    /// field get an empty string for it. Unrelated settings fields in the
    /// blob are ignored.
    pub fn from_value(raw: &Value) -> Self {
        let mut config = Self::default();
        if let Some(rows) = raw.get("patterns").and_then(Value::as_array) {
            config.patterns = rows
                .iter()
                .filter_map(|row| serde_json::from_value(row.clone()).ok())
                .collect();
        }
        config
    }

    /// Load config from the given directory. Missing file, unreadable file,
    /// and malformed JSON all degrade to defaults rather than failing.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        let raw = fs::read_to_string(&config_path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or(Value::Null);
        Self::from_value(&raw)
    }

    /// Save config to the given directory, overwriting any previous value
    /// wholesale.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AutoreplaceError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AutoreplaceError::Serialization)?;
        fs::write(config_path, content).map_err(AutoreplaceError::Io)?;
        Ok(())
    }
}
