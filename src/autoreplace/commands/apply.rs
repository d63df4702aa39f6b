use crate::commands::{CmdMessage, CmdResult};
use crate::document::DocumentSink;
use crate::engine::{self, CursorAdvance};
use crate::error::Result;
use crate::store::{ConfigStore, PatternStore};

/// Run the engine over a document and write the result back only when at
/// least one replacement was made.
pub fn run<S: ConfigStore, D: DocumentSink>(
    store: &PatternStore<S>,
    doc: &mut D,
    cursor: CursorAdvance,
) -> Result<CmdResult> {
    let text = doc.text()?;
    let outcome = engine::apply_with(&text, store.patterns(), cursor);

    let mut result = CmdResult {
        replacements: outcome.count,
        ..CmdResult::default()
    };

    if outcome.count > 0 {
        doc.set_text(&outcome.text)?;
        result.add_message(CmdMessage::success(format!(
            "Autoreplace: {} items replaced.",
            outcome.count
        )));
    } else {
        result.add_message(CmdMessage::info("Autoreplace: 0 items replaced."));
    }

    Ok(result)
}
