use serde::{Deserialize, Serialize};

/// A literal (source, replacement) substitution rule.
///
/// An empty `replacement` is legal and means deletion. An empty `source`
/// marks a placeholder row (the persisted "new entry" sentinel) and is
/// never applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub replacement: String,
}

impl Pattern {
    pub fn new(source: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            replacement: replacement.into(),
        }
    }

    /// Placeholder rows have an empty source and must be skipped by the engine.
    pub fn is_active(&self) -> bool {
        !self.source.is_empty()
    }
}
