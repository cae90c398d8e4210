//! Ordered list of question/answer entries for the current document.
//!
//! Entries are addressed by [`EntryId`] only, so any number of answers can be
//! streaming at once and a late update for a cleared entry is dropped instead
//! of landing on a newer one.

use crate::entry::{ConversationEntry, EntryId, EntryStatus};
use crate::event::EntryUpdate;

#[derive(Debug, Default)]
pub struct ConversationLedger {
    entries: Vec<ConversationEntry>,
    next_id: u64,
}

impl ConversationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pending entry for `text`. Returns `None` for blank input;
    /// the caller opens exactly one request per returned id.
    pub fn submit(&mut self, text: &str) -> Option<EntryId> {
        let question = text.trim();
        if question.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = EntryId(self.next_id);
        self.entries.push(ConversationEntry::new(id, question));
        Some(id)
    }

    /// Routes an update to its entry. Unknown ids are ignored.
    pub fn apply(&mut self, id: EntryId, update: EntryUpdate) -> bool {
        match self.get_mut(id) {
            Some(entry) => entry.apply(update),
            None => {
                tracing::debug!(entry = %id, "dropping update for entry no longer in ledger");
                false
            }
        }
    }

    /// Drops every entry. The id counter keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ConversationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut ConversationEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn latest(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }

    pub fn latest_id(&self) -> Option<EntryId> {
        self.latest().map(|e| e.id)
    }

    pub fn is_latest(&self, id: EntryId) -> bool {
        self.latest_id() == Some(id)
    }

    /// Number of entries still waiting on or receiving a stream.
    pub fn outstanding(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status.is_in_flight())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn status_of(&self, id: EntryId) -> Option<EntryStatus> {
        self.get(id).map(|e| e.status)
    }
}
