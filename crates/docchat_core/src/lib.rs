pub mod accumulator;
pub mod entry;
pub mod error;
pub mod event;
pub mod journal;
pub mod ledger;
pub mod page_marker;
pub mod typing;

pub use accumulator::{AnswerAccumulator, PumpOutcome, pump};
pub use entry::{ConversationEntry, EntryId, EntryStatus};
pub use error::{DocchatError, Result};
pub use event::{EntryUpdate, Reference, StreamEvent, TotalTokens};
pub use journal::{DefaultQuestion, Journal};
pub use ledger::ConversationLedger;
pub use page_marker::{FormattedAnswer, cited_page, format_answer};
pub use typing::TypingReveal;
