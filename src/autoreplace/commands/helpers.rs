use crate::commands::{CmdMessage, CmdResult};
use crate::store::{ConfigStore, PatternStore};

/// Persist after a mutation. A persistence failure is surfaced as a
/// warning rather than an error: the in-memory list stays authoritative
/// for the rest of the session.
pub fn persist_or_warn<S: ConfigStore>(store: &mut PatternStore<S>, result: &mut CmdResult) {
    if let Err(e) = store.persist() {
        result.add_message(CmdMessage::warning(format!(
            "Could not persist patterns ({}); changes kept for this session only",
            e
        )));
    }
}
