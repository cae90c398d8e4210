//! Turns one request's event stream into entry updates.

use std::fmt::Display;

use futures::{Stream, StreamExt};

use crate::entry::EntryId;
use crate::event::{EntryUpdate, StreamEvent};

pub const EARLY_EOF_REASON: &str = "stream ended before the answer completed";

/// Per-request gate. Forwards events until the first `End` or failure, then
/// swallows everything else.
#[derive(Debug, Default)]
pub struct AnswerAccumulator {
    finished: bool,
    received_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PumpOutcome {
    Completed,
    Failed(String),
    /// The stream had already finished before the transport reported anything else.
    Ignored,
}

impl AnswerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn received_chars(&self) -> usize {
        self.received_chars
    }

    pub fn on_event(&mut self, event: StreamEvent) -> Option<EntryUpdate> {
        if self.finished {
            return None;
        }
        match &event {
            StreamEvent::Chunk { content } => self.received_chars += content.chars().count(),
            StreamEvent::End { .. } => self.finished = true,
        }
        Some(EntryUpdate::Event(event))
    }

    pub fn on_failure(&mut self, reason: impl Into<String>) -> Option<EntryUpdate> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(EntryUpdate::Failed(reason.into()))
    }

    /// Clean end of the byte stream. Without a prior `End` the answer is incomplete.
    pub fn on_eof(&mut self) -> Option<EntryUpdate> {
        self.on_failure(EARLY_EOF_REASON)
    }
}

/// Drives `stream` to completion, handing every update for `id` to `sink` in arrival order.
pub async fn pump<S, E, F>(stream: S, id: EntryId, mut sink: F) -> PumpOutcome
where
    S: Stream<Item = Result<StreamEvent, E>>,
    E: Display,
    F: FnMut(EntryId, EntryUpdate),
{
    let mut acc = AnswerAccumulator::new();
    let mut stream = std::pin::pin!(stream);

    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                if let Some(update) = acc.on_event(event) {
                    sink(id, update);
                }
                if acc.is_finished() {
                    return PumpOutcome::Completed;
                }
            }
            Err(err) => {
                let reason = err.to_string();
                tracing::warn!(entry = %id, error = %reason, "answer stream failed");
                return match acc.on_failure(reason.clone()) {
                    Some(update) => {
                        sink(id, update);
                        PumpOutcome::Failed(reason)
                    }
                    None => PumpOutcome::Ignored,
                };
            }
        }
    }

    match acc.on_eof() {
        Some(update) => {
            tracing::warn!(entry = %id, received = acc.received_chars(), "answer stream closed without end record");
            sink(id, update);
            PumpOutcome::Failed(EARLY_EOF_REASON.to_string())
        }
        None => PumpOutcome::Ignored,
    }
}
