//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! autoreplace operations, regardless of the UI driving them. It dispatches
//! to `commands/*`, owns the session's [`PatternStore`], and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O beyond
//! the injected collaborators, no presentation concerns.
//!
//! `AutoreplaceApi<S: ConfigStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::document::DocumentSink;
use crate::engine::{self, CursorAdvance, Substitution};
use crate::error::Result;
use crate::model::Pattern;
use crate::store::{ConfigStore, PatternStore};

/// The main API facade. Loads the persisted configuration once at
/// construction and owns it for the rest of the session; every mutation is
/// followed by a persist through the store.
pub struct AutoreplaceApi<S: ConfigStore> {
    store: PatternStore<S>,
}

impl<S: ConfigStore> AutoreplaceApi<S> {
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            store: PatternStore::open(store)?,
        })
    }

    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, pattern)
    }

    pub fn update_pattern(&mut self, index: usize, pattern: Pattern) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, index, pattern)
    }

    pub fn remove_pattern(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, index)
    }

    pub fn list_patterns(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Apply the pattern list to a document, writing back only when at
    /// least one replacement was made.
    pub fn apply_to<D: DocumentSink>(
        &self,
        doc: &mut D,
        cursor: CursorAdvance,
    ) -> Result<commands::CmdResult> {
        commands::apply::run(&self.store, doc, cursor)
    }

    /// Apply the pattern list to a plain string, for callers that manage
    /// their own document I/O (e.g. a stdin/stdout pipe).
    pub fn apply_text(&self, text: &str, cursor: CursorAdvance) -> Substitution {
        engine::apply_with(text, self.store.patterns(), cursor)
    }

    pub fn patterns(&self) -> &[Pattern] {
        self.store.patterns()
    }
}

pub use commands::{CmdMessage, CmdResult, ListedPattern, MessageLevel};
