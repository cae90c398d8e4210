use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::event::{EntryUpdate, Reference, StreamEvent, TotalTokens};

/// Identity of one question/answer pair. Assigned by the ledger, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Pending,
    Streaming,
    Complete,
    Failed,
}

impl EntryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, EntryStatus::Complete | EntryStatus::Failed)
    }

    pub fn is_in_flight(self) -> bool {
        !self.is_terminal()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationEntry {
    pub id: EntryId,
    pub question: String,
    pub answer: String,
    pub references: Vec<Reference>,
    pub total_tokens: Option<TotalTokens>,
    pub status: EntryStatus,
    /// Bumped on every applied update; renderers key their caches on it.
    pub revision: u64,
    pub asked_at: DateTime<Local>,
}

impl ConversationEntry {
    pub fn new(id: EntryId, question: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: String::new(),
            references: Vec::new(),
            total_tokens: None,
            status: EntryStatus::Pending,
            revision: 0,
            asked_at: Local::now(),
        }
    }

    /// Applies one update. Returns false when the entry is already terminal
    /// and the update was dropped.
    pub fn apply(&mut self, update: EntryUpdate) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match update {
            EntryUpdate::Event(StreamEvent::Chunk { content }) => {
                self.answer.push_str(&content);
                self.status = EntryStatus::Streaming;
            }
            EntryUpdate::Event(StreamEvent::End {
                references,
                total_tokens,
            }) => {
                self.references = references;
                self.total_tokens = total_tokens;
                self.status = EntryStatus::Complete;
            }
            EntryUpdate::Failed(reason) => {
                self.answer = format!("Error: {}", reason);
                self.references.clear();
                self.status = EntryStatus::Failed;
            }
        }
        self.revision += 1;
        true
    }

    /// Token count for display, "N/A" when the backend did not report one.
    pub fn tokens_label(&self) -> String {
        self.total_tokens
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn asked_at_label(&self) -> String {
        self.asked_at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ConversationEntry {
        ConversationEntry::new(EntryId(1), "What is the dosage?")
    }

    #[test]
    fn new_entry_is_pending_and_empty() {
        let e = entry();
        assert_eq!(e.status, EntryStatus::Pending);
        assert!(e.answer.is_empty());
        assert_eq!(e.revision, 0);
    }

    #[test]
    fn chunks_append_and_start_streaming() {
        let mut e = entry();
        assert!(e.apply(StreamEvent::chunk("Hel").into()));
        assert!(e.apply(StreamEvent::chunk("lo").into()));
        assert_eq!(e.answer, "Hello");
        assert_eq!(e.status, EntryStatus::Streaming);
        assert_eq!(e.revision, 2);
    }

    #[test]
    fn end_sets_references_and_completes() {
        let mut e = entry();
        e.apply(StreamEvent::chunk("Hi").into());
        e.apply(
            StreamEvent::end(
                vec![Reference::new("r1", "a.pdf")],
                Some(TotalTokens::Count(5)),
            )
            .into(),
        );
        assert_eq!(e.status, EntryStatus::Complete);
        assert_eq!(e.references.len(), 1);
        assert_eq!(e.tokens_label(), "5");
    }

    #[test]
    fn end_without_chunks_completes_with_empty_answer() {
        let mut e = entry();
        e.apply(StreamEvent::end(Vec::new(), None).into());
        assert_eq!(e.status, EntryStatus::Complete);
        assert!(e.answer.is_empty());
        assert_eq!(e.tokens_label(), "N/A");
    }

    #[test]
    fn terminal_entry_ignores_later_updates() {
        let mut e = entry();
        e.apply(StreamEvent::chunk("done").into());
        e.apply(StreamEvent::end(Vec::new(), None).into());
        let revision = e.revision;
        assert!(!e.apply(StreamEvent::chunk(" extra").into()));
        assert!(!e.apply(EntryUpdate::Failed("late".into())));
        assert_eq!(e.answer, "done");
        assert_eq!(e.status, EntryStatus::Complete);
        assert_eq!(e.revision, revision);
    }

    #[test]
    fn failure_replaces_partial_answer() {
        let mut e = entry();
        e.apply(StreamEvent::chunk("partial").into());
        e.apply(EntryUpdate::Failed("connection reset".into()));
        assert_eq!(e.answer, "Error: connection reset");
        assert_eq!(e.status, EntryStatus::Failed);
    }

    #[test]
    fn entry_id_display() {
        assert_eq!(EntryId(7).to_string(), "#7");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn update() -> impl Strategy<Value = EntryUpdate> {
            prop_oneof![
                4 => "\\PC{0,8}".prop_map(|c| EntryUpdate::from(StreamEvent::chunk(c))),
                1 => prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(|ids| {
                    let refs = ids.iter().map(|id| Reference::new(id.as_str(), "doc.pdf")).collect();
                    EntryUpdate::from(StreamEvent::end(refs, None))
                }),
                1 => "[a-z ]{0,12}".prop_map(EntryUpdate::Failed),
            ]
        }

        proptest! {
            #[test]
            fn answer_grows_until_terminal_then_freezes(
                updates in prop::collection::vec(update(), 0..24),
            ) {
                let mut e = entry();
                let mut frozen: Option<(String, Vec<Reference>, EntryStatus, u64)> = None;

                for u in updates {
                    let before = e.answer.len();
                    let applied = e.apply(u);
                    match &frozen {
                        Some((answer, references, status, revision)) => {
                            prop_assert!(!applied);
                            prop_assert_eq!(&e.answer, answer);
                            prop_assert_eq!(&e.references, references);
                            prop_assert_eq!(e.status, *status);
                            prop_assert_eq!(e.revision, *revision);
                        }
                        None => {
                            prop_assert!(applied);
                            match e.status {
                                EntryStatus::Failed => {
                                    prop_assert!(e.answer.starts_with("Error:"));
                                    prop_assert!(e.references.is_empty());
                                }
                                _ => prop_assert!(e.answer.len() >= before),
                            }
                            if e.status.is_terminal() {
                                frozen = Some((
                                    e.answer.clone(),
                                    e.references.clone(),
                                    e.status,
                                    e.revision,
                                ));
                            }
                        }
                    }
                }
            }
        }
    }
}
