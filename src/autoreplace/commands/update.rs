use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Pattern;
use crate::store::{ConfigStore, PatternStore};

pub fn run<S: ConfigStore>(
    store: &mut PatternStore<S>,
    index: usize,
    pattern: Pattern,
) -> Result<CmdResult> {
    let label = format!("\"{}\" -> \"{}\"", pattern.source, pattern.replacement);
    store.update(index, pattern)?;

    let mut result = CmdResult::default();
    helpers::persist_or_warn(store, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Pattern {} updated: {}",
        index, label
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutoreplaceError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_in_place() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        store.add(Pattern::new("a", "b")).unwrap();

        run(&mut store, 1, Pattern::new("x", "y")).unwrap();
        assert_eq!(store.patterns()[1], Pattern::new("x", "y"));
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        let err = run(&mut store, 9, Pattern::new("x", "y")).unwrap_err();
        assert!(matches!(err, AutoreplaceError::IndexOutOfRange { .. }));
    }
}
