use crate::model::Pattern;

pub mod add;
pub mod apply;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A pattern paired with its position in the list, for display.
#[derive(Debug, Clone)]
pub struct ListedPattern {
    pub index: usize,
    pub pattern: Pattern,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_patterns: Vec<ListedPattern>,
    pub replacements: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_patterns(mut self, patterns: Vec<ListedPattern>) -> Self {
        self.listed_patterns = patterns;
        self
    }
}
