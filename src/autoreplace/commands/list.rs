use crate::commands::{CmdResult, ListedPattern};
use crate::error::Result;
use crate::store::{ConfigStore, PatternStore};

pub fn run<S: ConfigStore>(store: &PatternStore<S>) -> Result<CmdResult> {
    let listed = store
        .patterns()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, pattern)| ListedPattern { index, pattern })
        .collect();

    Ok(CmdResult::default().with_listed_patterns(listed))
}
