//! # Substitution Engine
//!
//! Pure text transformation: apply an ordered pattern list to a document's
//! text and count the replacements made. No I/O, no shared state, and no
//! error kind — the engine is total over its input domain (empty text or an
//! empty list return the input unchanged with count 0).
//!
//! Patterns are applied **sequentially**, in list order: each pattern is
//! scanned left-to-right for all non-overlapping literal occurrences before
//! the next pattern runs. A later pattern can therefore match text produced
//! by an earlier pattern's replacement (chaining). That makes list order
//! semantically meaningful and user-controlled, and is why this is not a
//! single simultaneous pass.

use crate::model::Pattern;

/// How the scan cursor advances after a replacement is spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAdvance {
    /// Advance by the *source* length in characters, measured against the
    /// already-spliced string. When source and replacement lengths differ
    /// the cursor lands partway into the replacement (longer) or past it
    /// (shorter). This reproduces the historical behavior exactly and is
    /// the default.
    #[default]
    Legacy,
    /// Advance past the inserted replacement.
    Intuitive,
}

/// Result of one engine run: the rewritten text and how many individual
/// replacements were made across all patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    pub text: String,
    pub count: usize,
}

/// Apply `patterns` to `text` in list order with the legacy cursor advance.
pub fn apply(text: &str, patterns: &[Pattern]) -> Substitution {
    apply_with(text, patterns, CursorAdvance::Legacy)
}

/// Apply `patterns` to `text` in list order with an explicit cursor mode.
///
/// Patterns with an empty source are skipped entirely; a zero-width match
/// would otherwise never terminate. Matching is exact, case-sensitive
/// literal substring search over bytes.
pub fn apply_with(text: &str, patterns: &[Pattern], cursor: CursorAdvance) -> Substitution {
    let mut working = text.to_string();
    let mut count = 0;

    for pattern in patterns {
        if !pattern.is_active() {
            continue;
        }

        let mut idx = 0;
        while let Some(offset) = working[idx..].find(&pattern.source) {
            let at = idx + offset;
            working.replace_range(at..at + pattern.source.len(), &pattern.replacement);
            count += 1;

            idx = match cursor {
                // The source length is a character count, applied to the
                // spliced string: byte arithmetic would overshoot whenever
                // source and replacement have different byte widths per
                // character.
                CursorAdvance::Legacy => {
                    let chars = pattern.source.chars().count();
                    working[at..]
                        .char_indices()
                        .nth(chars)
                        .map(|(offset, _)| at + offset)
                        .unwrap_or(working.len())
                }
                CursorAdvance::Intuitive => at + pattern.replacement.len(),
            };
        }
    }

    Substitution {
        text: working,
        count,
    }
}
