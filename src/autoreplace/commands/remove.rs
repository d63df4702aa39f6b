use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ConfigStore, PatternStore};

pub fn run<S: ConfigStore>(store: &mut PatternStore<S>, index: usize) -> Result<CmdResult> {
    let removed = store.remove(index)?;

    let mut result = CmdResult::default();
    helpers::persist_or_warn(store, &mut result);
    result.add_message(CmdMessage::success(format!(
        "Pattern {} removed: \"{}\" -> \"{}\"",
        index, removed.source, removed.replacement
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutoreplaceError;
    use crate::model::Pattern;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_and_shifts() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        store.add(Pattern::new("a", "b")).unwrap();
        store.add(Pattern::new("c", "d")).unwrap();

        run(&mut store, 1).unwrap();
        assert_eq!(store.patterns()[1], Pattern::new("c", "d"));
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut store = PatternStore::open(InMemoryStore::new()).unwrap();
        let err = run(&mut store, 9).unwrap_err();
        assert!(matches!(err, AutoreplaceError::IndexOutOfRange { .. }));
    }
}
