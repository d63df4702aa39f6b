use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Pattern;
use crate::store::{ConfigStore, PatternStore};

pub fn run<S: ConfigStore>(store: &mut PatternStore<S>, pattern: Pattern) -> Result<CmdResult> {
    let label = format!("\"{}\" -> \"{}\"", pattern.source, pattern.replacement);
    store.add(pattern)?;

    let mut result = CmdResult::default();
    helpers::persist_or_warn(store, &mut result);
    result.add_message(CmdMessage::success(format!("Pattern added: {}", label)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutoreplaceError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_persists() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        run(&mut store, Pattern::new("foo", "bar")).unwrap();

        assert!(store.patterns().contains(&Pattern::new("foo", "bar")));
        // A mutation is immediately followed by a persist.
        let saved = store.into_inner();
        assert!(saved
            .saved()
            .unwrap()
            .patterns
            .contains(&Pattern::new("foo", "bar")));
    }

    #[test]
    fn rejects_incomplete_pattern_without_mutating() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        let before = store.patterns().to_vec();

        let err = run(&mut store, Pattern::new("foo", "")).unwrap_err();
        assert!(matches!(err, AutoreplaceError::Validation(_)));
        assert_eq!(store.patterns(), before.as_slice());
    }
}
