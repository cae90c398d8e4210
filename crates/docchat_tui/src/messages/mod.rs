//! Per-entry rendering for the chat pane.
//!
//! Each [`ConversationEntry`] is drawn by exactly one renderer, chosen by its
//! [`RenderRole`]: in-flight entries get the thinking indicator, the latest
//! completed entry gets the typing reveal, other completed entries get the
//! static formatter, and failed entries get the error renderer.

pub mod answer;
pub mod error;
pub mod markdown;
pub mod question;
pub mod thinking;

use docchat_core::{ConversationEntry, EntryStatus};
use ratatui::text::Line;

use crate::animation::Shimmer;
use crate::theme::DocchatPalette;

/// Which renderer draws an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderRole {
    Thinking,
    Typing,
    Static,
    Failed,
}

impl RenderRole {
    /// `revealing` is true while the typing reveal still tracks this entry.
    pub fn for_entry(entry: &ConversationEntry, revealing: bool) -> Self {
        match entry.status {
            EntryStatus::Pending | EntryStatus::Streaming => RenderRole::Thinking,
            EntryStatus::Failed => RenderRole::Failed,
            EntryStatus::Complete if revealing => RenderRole::Typing,
            EntryStatus::Complete => RenderRole::Static,
        }
    }

    /// Static and failed output only changes with the entry's revision.
    pub fn is_cacheable(self) -> bool {
        matches!(self, RenderRole::Static | RenderRole::Failed)
    }
}

/// What a click on a region of the screen does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open `/pdf/{id}` for a reference.
    OpenReference(String),
    /// Move the document pane to a cited page.
    GoToPage(u32),
    /// Ask a suggested question from the welcome panel (0-based).
    AskSuggested(usize),
    /// Open a journal from the document picker.
    OpenJournal(usize),
    /// Open the current document in the system viewer at its page.
    OpenDocument,
}

/// Clickable span within a rendered entry, in entry-relative coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTarget {
    pub line: usize,
    pub start_col: u16,
    pub end_col: u16,
    pub action: ClickAction,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedEntry {
    pub lines: Vec<Line<'static>>,
    pub targets: Vec<HitTarget>,
}

impl RenderedEntry {
    fn push_lines(&mut self, lines: Vec<Line<'static>>) {
        self.lines.extend(lines);
    }

    /// Appends another block, shifting its targets below the current lines.
    fn append(&mut self, other: RenderedEntry) {
        let offset = self.lines.len();
        self.targets.extend(other.targets.into_iter().map(|mut t| {
            t.line += offset;
            t
        }));
        self.lines.extend(other.lines);
    }
}

/// Inputs that only some roles need.
pub struct RenderContext<'a> {
    pub palette: &'a DocchatPalette,
    pub width: usize,
    pub shimmer: &'a Shimmer,
    /// Revealed prefix, used by [`RenderRole::Typing`].
    pub revealed: &'a str,
}

/// Question, references box, then the role's answer body.
pub fn render_entry(entry: &ConversationEntry, role: RenderRole, ctx: &RenderContext<'_>) -> RenderedEntry {
    let mut out = RenderedEntry::default();
    out.push_lines(question::question_lines(
        &entry.question,
        Some(&entry.asked_at_label()),
        ctx.palette,
        ctx.width,
    ));
    if !entry.references.is_empty() {
        out.append(answer::references_box(&entry.references, ctx.palette, ctx.width));
    }
    match role {
        RenderRole::Thinking => out.push_lines(thinking::thinking_lines(
            entry.answer.chars().count(),
            ctx.shimmer,
            ctx.palette,
        )),
        RenderRole::Typing => out.push_lines(answer::typing_lines(ctx.revealed, ctx.palette, ctx.width)),
        RenderRole::Static => out.append(answer::static_lines(&entry.answer, ctx.palette, ctx.width)),
        RenderRole::Failed => out.push_lines(error::error_lines(&entry.answer, ctx.palette, ctx.width)),
    }
    if matches!(role, RenderRole::Typing | RenderRole::Static) {
        if let Some(tokens) = &entry.total_tokens {
            out.push_lines(vec![answer::tokens_line(&tokens.to_string(), ctx.palette)]);
        }
    }
    out
}
