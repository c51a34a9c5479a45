use crate::naming::{GroupKey, SequenceName};
use std::collections::HashMap;

/// Per-scan sequence counters, one per [`GroupKey`].
///
/// A counter only advances through [`Sequencer::commit`], so a failed rename
/// leaves its number free for the next file in the same group.
#[derive(Debug, Default)]
pub struct Sequencer {
    counters: HashMap<GroupKey, u32>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target file name for the next member of `name`'s group.
    pub fn propose(&self, name: &SequenceName) -> String {
        name.renamed(self.current(&name.group_key()) + 1)
    }

    pub fn commit(&mut self, name: &SequenceName) -> u32 {
        let counter = self.counters.entry(name.group_key()).or_insert(0);
        *counter += 1;
        *counter
    }

    pub fn current(&self, key: &GroupKey) -> u32 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    pub fn group_count(&self) -> usize {
        self.counters.len()
    }
}
