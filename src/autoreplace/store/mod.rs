//! # Storage Layer
//!
//! The [`ConfigStore`] trait abstracts where the configuration record is
//! persisted so the rest of the crate never touches the filesystem
//! directly:
//!
//! - [`fs::FileStore`]: production JSON file storage (`config.json` in a
//!   config directory)
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! [`PatternStore`] sits on top of a `ConfigStore` and owns the in-session
//! pattern list: all mutation goes through it, and each mutation is
//! followed by an explicit [`PatternStore::persist`] call by the command
//! layer. Persistence is a wholesale overwrite of the stored record, not a
//! merge.
//!
//! Single logical thread of control per session; there is no internal
//! locking. Callers sharing a store across threads must add their own
//! mutual exclusion.

use crate::config::AutoreplaceConfig;
use crate::error::{AutoreplaceError, Result};
use crate::model::Pattern;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the configuration record.
pub trait ConfigStore {
    /// Load the persisted configuration, merged over defaults. Never fails
    /// on malformed or absent data; only on environmental errors.
    fn load(&self) -> Result<AutoreplaceConfig>;

    /// Overwrite the persisted configuration wholesale.
    fn save(&mut self, config: &AutoreplaceConfig) -> Result<()>;
}

/// Owns the pattern list for the duration of a session and mediates all
/// mutation of it.
pub struct PatternStore<S: ConfigStore> {
    store: S,
    config: AutoreplaceConfig,
}

impl<S: ConfigStore> PatternStore<S> {
    /// Load the persisted configuration once, at session start.
    pub fn open(store: S) -> Result<Self> {
        let config = store.load()?;
        Ok(Self { store, config })
    }

    /// The current list, in application order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.config.patterns
    }

    /// Append a pattern at the end of the list.
    ///
    /// Both fields are required for a stored pattern; on a validation
    /// failure the list is left unchanged.
    pub fn add(&mut self, pattern: Pattern) -> Result<()> {
        if pattern.source.is_empty() || pattern.replacement.is_empty() {
            return Err(AutoreplaceError::Validation(
                "both source and replacement are required".to_string(),
            ));
        }
        self.config.patterns.push(pattern);
        Ok(())
    }

    /// Replace the pattern at `index` in place, preserving its position.
    pub fn update(&mut self, index: usize, pattern: Pattern) -> Result<()> {
        let len = self.config.patterns.len();
        let slot = self
            .config
            .patterns
            .get_mut(index)
            .ok_or(AutoreplaceError::IndexOutOfRange { index, len })?;
        *slot = pattern;
        Ok(())
    }

    /// Delete the pattern at `index`, shifting subsequent patterns left.
    pub fn remove(&mut self, index: usize) -> Result<Pattern> {
        let len = self.config.patterns.len();
        if index >= len {
            return Err(AutoreplaceError::IndexOutOfRange { index, len });
        }
        Ok(self.config.patterns.remove(index))
    }

    /// Write the current list through to durable storage.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save(&self.config)
    }

    /// Give the underlying store back, e.g. to inspect it in tests.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;

    fn open_empty() -> PatternStore<InMemoryStore> {
        PatternStore::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn test_open_starts_from_defaults() {
        let store = open_empty();
        assert_eq!(store.patterns(), &[Pattern::new("", "")]);
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut store = open_empty();
        store.add(Pattern::new("a", "b")).unwrap();
        store.add(Pattern::new("c", "d")).unwrap();

        let tail = &store.patterns()[store.patterns().len() - 2..];
        assert_eq!(tail, &[Pattern::new("a", "b"), Pattern::new("c", "d")]);
    }

    #[test]
    fn test_add_rejects_empty_source() {
        let mut store = open_empty();
        let before = store.patterns().to_vec();
        match store.add(Pattern::new("", "b")) {
            Err(AutoreplaceError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }
        assert_eq!(store.patterns(), before.as_slice());
    }

    #[test]
    fn test_add_rejects_empty_replacement() {
        let mut store = open_empty();
        let before = store.patterns().to_vec();
        assert!(matches!(
            store.add(Pattern::new("a", "")),
            Err(AutoreplaceError::Validation(_))
        ));
        assert_eq!(store.patterns(), before.as_slice());
    }

    #[test]
    fn test_update_preserves_position() {
        let mut store = open_empty();
        store.add(Pattern::new("a", "b")).unwrap();
        store.add(Pattern::new("c", "d")).unwrap();

        store.update(1, Pattern::new("x", "y")).unwrap();
        assert_eq!(store.patterns()[1], Pattern::new("x", "y"));
        assert_eq!(store.patterns()[2], Pattern::new("c", "d"));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut store = open_empty();
        let len = store.patterns().len();
        match store.update(len, Pattern::new("x", "y")) {
            Err(AutoreplaceError::IndexOutOfRange { index, len: l }) => {
                assert_eq!(index, len);
                assert_eq!(l, len);
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut store = open_empty();
        store.add(Pattern::new("a", "b")).unwrap();
        store.add(Pattern::new("c", "d")).unwrap();

        // Placeholder row sits at 0; drop it, then old index 1 holds (c, d).
        let removed = store.remove(0).unwrap();
        assert_eq!(removed, Pattern::new("", ""));
        assert_eq!(store.patterns()[1], Pattern::new("c", "d"));

        store.remove(1).unwrap();
        assert!(matches!(
            store.remove(1),
            Err(AutoreplaceError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_persist_round_trip() {
        let mut store = open_empty();
        store.remove(0).unwrap();
        store.add(Pattern::new("foo", "bar")).unwrap();
        store.add(Pattern::new("foo", "baz")).unwrap();
        store.persist().unwrap();

        let reopened = PatternStore::open(store.store).unwrap();
        assert_eq!(
            reopened.patterns(),
            &[Pattern::new("foo", "bar"), Pattern::new("foo", "baz")]
        );
    }
}
