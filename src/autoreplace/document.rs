use crate::error::{AutoreplaceError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A host document the engine's output is written back to.
///
/// The engine itself is pure; reading the current text and writing the
/// rewritten text belong to the caller, behind this seam. Write-back is
/// conditional: callers only invoke [`DocumentSink::set_text`] when at
/// least one replacement was made.
pub trait DocumentSink {
    fn text(&self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// A document backed by a file on disk, rewritten in place.
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileDocument {
    fn text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(AutoreplaceError::Io)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        fs::write(&self.path, text).map_err(AutoreplaceError::Io)
    }
}

/// In-memory document for tests; records how many times it was written.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    text: String,
    writes: usize,
}

impl InMemoryDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DocumentSink for InMemoryDocument {
    fn text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        self.writes += 1;
        Ok(())
    }
}
