//! TUI state: conversation, document, split, input, scroll and theme.
//!
//! [TuiState] holds everything the view needs to render. Runtime work (asking,
//! loading journals) leaves as [TuiRequest]s; results come back through
//! [TuiState::apply_update] and [TuiState::set_journals].

use std::collections::HashMap;
use std::time::Instant;

use docchat_core::{
    ConversationLedger, EntryId, EntryStatus, EntryUpdate, Journal, TypingReveal, cited_page,
};
use ratatui::layout::Rect;

use crate::animation::Shimmer;
use crate::input::InputBuffer;
use crate::layouts::SplitPane;
use crate::messages::{ClickAction, RenderRole, RenderedEntry};
use crate::theme::{Appearance, DocchatPalette};
use crate::utils::{
    MAX_DEFAULT_QUESTIONS, MAX_TRACE_LINES, PAGE_SCROLL_LINES, STATUS_TIMEOUT, rect_contains,
};

/// Theme configuration handed to every renderer.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub appearance: Appearance,
    pub palette: DocchatPalette,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(Appearance::default())
    }
}

impl UiConfig {
    pub const THEME_ENV: &'static str = "DOCCHAT_THEME";

    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            palette: DocchatPalette::for_appearance(appearance),
        }
    }

    /// Appearance from `DOCCHAT_THEME`, dark when unset or unrecognised.
    pub fn from_env() -> Self {
        let appearance = std::env::var(Self::THEME_ENV)
            .ok()
            .and_then(|v| Appearance::parse(&v))
            .unwrap_or_default();
        Self::new(appearance)
    }

    pub fn toggle(&mut self) {
        *self = Self::new(self.appearance.toggled());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Document picker fed by `/journals`.
    Documents,
    /// Document pane and chat pane.
    Main,
    /// Runtime logs (Ctrl+D).
    Logs,
}

/// Work for the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiRequest {
    Ask {
        entry_id: EntryId,
        question: String,
        document_id: String,
    },
    LoadJournals,
}

/// The document shown in the viewer pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub source_url: String,
    pub page: u32,
    pub default_questions: Vec<String>,
}

impl DocumentView {
    pub fn new(journal: &Journal, api_base: &str) -> Self {
        let title = if journal.title.trim().is_empty() {
            journal.id.clone()
        } else {
            journal.title.clone()
        };
        Self {
            id: journal.id.clone(),
            title,
            desc: journal.desc.clone(),
            source_url: format!("{}/pdf/{}", api_base, journal.id),
            page: 1,
            default_questions: journal
                .default_questions
                .iter()
                .map(|q| q.question.trim().to_string())
                .filter(|q| !q.is_empty())
                .take(MAX_DEFAULT_QUESTIONS)
                .collect(),
        }
    }

    /// Page numbers start at 1.
    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn step_page(&mut self, delta: i32) {
        self.go_to_page(self.page.saturating_add_signed(delta));
    }

    /// Viewer URL opened at the current page.
    pub fn url_at_page(&self) -> String {
        format!("{}#page={}", self.source_url, self.page)
    }
}

/// Documents from `/journals`.
#[derive(Debug, Clone, Default)]
pub struct JournalList {
    pub items: Vec<Journal>,
    /// Fetch failure shown in place of the list.
    pub error: Option<String>,
    pub loading: bool,
    pub selected: usize,
}

impl JournalList {
    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&Journal> {
        self.items.get(self.selected)
    }
}

/// Rendered lines for one entry plus the inputs they were rendered from.
#[derive(Debug, Clone)]
pub struct CachedEntry {
    pub revision: u64,
    pub width: usize,
    pub role: RenderRole,
    pub rendered: RenderedEntry,
}

impl CachedEntry {
    pub fn matches(&self, revision: u64, width: usize, role: RenderRole) -> bool {
        self.revision == revision && self.width == width && self.role == role
    }
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    pub ui: UiConfig,
    pub screen: Screen,
    /// `{apiBase}`, for reference links.
    pub api_base: String,
    pub ledger: ConversationLedger,
    pub reveal: TypingReveal,
    pub shimmer: Shimmer,
    pub split: SplitPane,
    pub document: Option<DocumentView>,
    pub journals: JournalList,
    pub input: InputBuffer,
    /// Lines scrolled up from the bottom of the chat.
    pub scroll: usize,
    /// When true, keep the newest entry in view.
    pub auto_scroll: bool,
    pub status: String,
    pub status_is_error: bool,
    /// When set, status is transient and clears after [STATUS_TIMEOUT].
    pub status_set_at: Option<Instant>,
    /// Next draw should run; cleared after draw.
    pub needs_redraw: bool,
    pub render_cache: HashMap<EntryId, CachedEntry>,
    /// Clickable screen regions from the last draw.
    pub hit_regions: Vec<(Rect, ClickAction)>,
    /// Chat rows visible in the last draw; one page for PgUp/PgDn.
    pub last_viewport_height: usize,
    /// Terminal width, drives the split axis.
    pub viewport_cols: u16,
    pub trace_lines: Vec<String>,
    pub trace_scroll: usize,
}

impl TuiState {
    pub fn new(api_base: impl Into<String>, ui: UiConfig) -> Self {
        Self {
            ui,
            screen: Screen::Documents,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ledger: ConversationLedger::new(),
            reveal: TypingReveal::default(),
            shimmer: Shimmer::default(),
            split: SplitPane::default(),
            document: None,
            journals: JournalList::default(),
            input: InputBuffer::default(),
            scroll: 0,
            auto_scroll: true,
            status: String::new(),
            status_is_error: false,
            status_set_at: None,
            needs_redraw: true,
            render_cache: HashMap::new(),
            hit_regions: Vec::new(),
            last_viewport_height: 0,
            viewport_cols: 0,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }

    /// Switches the viewer to `journal`: the conversation is cleared, the page
    /// resets to 1 and in-flight answers for the old document are orphaned.
    pub fn open_document(&mut self, journal: &Journal) {
        let outstanding = self.ledger.outstanding();
        tracing::info!(document = %journal.id, orphaned = outstanding, "switching document");
        self.ledger.clear();
        self.reveal.reset();
        self.render_cache.clear();
        self.hit_regions.clear();
        self.document = Some(DocumentView::new(journal, &self.api_base));
        self.scroll = 0;
        self.auto_scroll = true;
        self.screen = Screen::Main;
        self.needs_redraw = true;
    }

    /// Opens the highlighted journal from the picker.
    pub fn open_selected_journal(&mut self) -> bool {
        match self.journals.selected().cloned() {
            Some(journal) => {
                self.open_document(&journal);
                true
            }
            None => false,
        }
    }

    pub fn open_journal(&mut self, index: usize) -> bool {
        if index >= self.journals.items.len() {
            return false;
        }
        self.journals.selected = index;
        self.open_selected_journal()
    }

    /// Journals arrived (or failed). Fills in title and suggestions for a
    /// document opened by id before the list was known.
    pub fn set_journals(&mut self, result: Result<Vec<Journal>, String>) {
        self.journals.loading = false;
        match result {
            Ok(items) => {
                self.journals.error = None;
                if let Some(doc) = &mut self.document {
                    if let Some(j) = items.iter().find(|j| j.id == doc.id) {
                        let page = doc.page;
                        *doc = DocumentView::new(j, &self.api_base);
                        doc.page = page;
                    }
                }
                self.journals.selected = self.journals.selected.min(items.len().saturating_sub(1));
                self.journals.items = items;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load journals");
                self.journals.error = Some(e);
            }
        }
        self.needs_redraw = true;
    }

    pub fn request_journals(&mut self) -> TuiRequest {
        self.journals.loading = true;
        self.journals.error = None;
        self.needs_redraw = true;
        TuiRequest::LoadJournals
    }

    /// Submits the input as a question. Blank input is ignored and left in place.
    pub fn submit_input(&mut self) -> Option<TuiRequest> {
        if self.input.is_blank() {
            return None;
        }
        if self.document.is_none() {
            self.set_status("Pick a document first (Ctrl+O)", true);
            return None;
        }
        let question = self.input.take();
        self.ask(&question)
    }

    /// Asks suggested question `index` (0-based) from the welcome panel.
    pub fn ask_suggested(&mut self, index: usize) -> Option<TuiRequest> {
        let question = self
            .document
            .as_ref()
            .and_then(|d| d.default_questions.get(index))
            .cloned()?;
        self.ask(&question)
    }

    fn ask(&mut self, question: &str) -> Option<TuiRequest> {
        let document_id = self.document.as_ref()?.id.clone();
        let entry_id = self.ledger.submit(question)?;
        // The previous latest answer drops to the static formatter.
        self.reveal.reset();
        self.auto_scroll = true;
        self.scroll = 0;
        self.needs_redraw = true;
        let question = self.ledger.get(entry_id).map(|e| e.question.clone())?;
        Some(TuiRequest::Ask {
            entry_id,
            question,
            document_id,
        })
    }

    /// Applies one stream update. Updates for entries no longer in the ledger
    /// (cleared by a document switch) are dropped.
    pub fn apply_update(&mut self, id: EntryId, update: EntryUpdate, now: Instant) {
        let failure = match &update {
            EntryUpdate::Failed(reason) => Some(reason.clone()),
            _ => None,
        };
        if !self.ledger.apply(id, update) {
            return;
        }
        if let Some(reason) = failure {
            self.set_status(format!("Failed to get response: {}", reason), true);
        }
        if self.ledger.is_latest(id) {
            if let Some(entry) = self.ledger.get(id) {
                if entry.status == EntryStatus::Complete {
                    self.reveal.sync(id, &entry.answer, now);
                }
            }
        }
        if self.auto_scroll {
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Per-frame housekeeping: reveal progress, shimmer, status expiry.
    pub fn tick(&mut self, now: Instant) {
        if self.reveal.advance(now) {
            self.needs_redraw = true;
        }
        if self.ledger.outstanding() > 0 {
            self.shimmer.tick(now);
            self.needs_redraw = true;
        }
        if let Some(t) = self.status_set_at {
            if now.saturating_duration_since(t) >= STATUS_TIMEOUT {
                self.clear_status();
            }
        }
    }

    /// Render role for an entry, given the current reveal.
    pub fn role_of(&self, id: EntryId) -> Option<RenderRole> {
        let entry = self.ledger.get(id)?;
        Some(RenderRole::for_entry(entry, self.reveal.is_revealing(id)))
    }

    pub fn is_in_flight(&self) -> bool {
        self.ledger.outstanding() > 0
    }

    /// Welcome panel is shown until the first question of this document.
    pub fn shows_welcome(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn set_status(&mut self, status: impl Into<String>, is_error: bool) {
        self.status = status.into();
        self.status_is_error = is_error;
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
        self.status_is_error = false;
        self.status_set_at = None;
        self.needs_redraw = true;
    }

    pub fn go_to_page(&mut self, page: u32) {
        if let Some(doc) = &mut self.document {
            doc.go_to_page(page);
            tracing::debug!(document = %doc.id, page = doc.page, "page changed");
            self.needs_redraw = true;
        }
    }

    pub fn step_page(&mut self, delta: i32) {
        if let Some(doc) = &mut self.document {
            doc.step_page(delta);
            self.needs_redraw = true;
        }
    }

    /// First page cited by the newest completed answer.
    pub fn latest_cited_page(&self) -> Option<u32> {
        self.ledger
            .entries()
            .iter()
            .rev()
            .find(|e| e.status == EntryStatus::Complete)
            .and_then(|e| cited_page(&e.answer))
    }

    /// Text of the newest completed answer, for the clipboard.
    pub fn latest_answer(&self) -> Option<&str> {
        self.ledger
            .entries()
            .iter()
            .rev()
            .find(|e| e.status == EntryStatus::Complete)
            .map(|e| e.answer.as_str())
    }

    pub fn reference_url(&self, reference_id: &str) -> String {
        format!("{}/pdf/{}", self.api_base, reference_id)
    }

    /// Action under the cell `(column, row)` from the last draw.
    pub fn action_at(&self, column: u16, row: u16) -> Option<ClickAction> {
        self.hit_regions
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, action)| action.clone())
    }

    pub fn toggle_theme(&mut self) {
        self.ui.toggle();
        self.render_cache.clear();
        self.needs_redraw = true;
    }

    /// Rows moved by PgUp/PgDn: the visible chat less two lines of overlap.
    pub fn page_lines(&self) -> usize {
        match self.last_viewport_height {
            0 => PAGE_SCROLL_LINES,
            h => h.saturating_sub(2).max(1),
        }
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down; back at the bottom re-enables auto_scroll.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Append a line to the log screen buffer, dropping the oldest over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docchat_core::{DefaultQuestion, Reference, StreamEvent, TotalTokens};
    use std::time::Duration;

    const BASE: &str = "http://localhost:8000";

    fn journal(id: &str) -> Journal {
        Journal {
            id: id.into(),
            title: format!("Journal {}", id),
            desc: "Clinical guideline".into(),
            img: String::new(),
            default_questions: vec![
                DefaultQuestion {
                    id: serde_json::json!("1"),
                    question: "What is the recommended dosage?".into(),
                },
                DefaultQuestion {
                    id: serde_json::json!("2"),
                    question: "  ".into(),
                },
            ],
        }
    }

    fn with_document() -> TuiState {
        let mut s = TuiState::new(BASE, UiConfig::default());
        s.open_document(&journal("cardio"));
        s
    }

    fn ask(s: &mut TuiState, text: &str) -> EntryId {
        s.input.insert_str(text);
        match s.submit_input() {
            Some(TuiRequest::Ask { entry_id, .. }) => entry_id,
            other => panic!("expected ask, got {:?}", other),
        }
    }

    fn chunk(s: &str) -> EntryUpdate {
        EntryUpdate::Event(StreamEvent::chunk(s))
    }

    fn end() -> EntryUpdate {
        EntryUpdate::Event(StreamEvent::end(
            vec![Reference::new("cardio", "Journal cardio")],
            Some(TotalTokens::Count(42)),
        ))
    }

    #[test]
    fn starts_on_document_picker() {
        let s = TuiState::new("http://localhost:8000/", UiConfig::default());
        assert_eq!(s.screen, Screen::Documents);
        assert_eq!(s.api_base, BASE);
    }

    #[test]
    fn open_document_builds_view() {
        let s = with_document();
        let doc = s.document.as_ref().unwrap();
        assert_eq!(s.screen, Screen::Main);
        assert_eq!(doc.source_url, "http://localhost:8000/pdf/cardio");
        assert_eq!(doc.page, 1);
        assert_eq!(doc.default_questions, vec!["What is the recommended dosage?"]);
    }

    #[test]
    fn submit_creates_pending_entry_and_request() {
        let mut s = with_document();
        s.input.insert_str("  What is the dosage?  ");
        let request = s.submit_input();
        let Some(TuiRequest::Ask {
            entry_id,
            question,
            document_id,
        }) = request
        else {
            panic!("expected ask request");
        };
        assert_eq!(question, "What is the dosage?");
        assert_eq!(document_id, "cardio");
        assert_eq!(s.ledger.status_of(entry_id), Some(EntryStatus::Pending));
        assert_eq!(s.input.text(), "");
        assert!(s.is_in_flight());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut s = with_document();
        s.input.insert_str("   ");
        assert!(s.submit_input().is_none());
        assert!(s.ledger.is_empty());
        assert_eq!(s.input.text(), "   ");
    }

    #[test]
    fn submit_without_document_sets_status() {
        let mut s = TuiState::new(BASE, UiConfig::default());
        s.input.insert_str("question");
        assert!(s.submit_input().is_none());
        assert!(s.status_is_error);
        assert!(s.ledger.is_empty());
    }

    #[test]
    fn suggested_question_is_asked() {
        let mut s = with_document();
        let Some(TuiRequest::Ask { question, .. }) = s.ask_suggested(0) else {
            panic!("expected ask request");
        };
        assert_eq!(question, "What is the recommended dosage?");
        assert!(s.ask_suggested(5).is_none());
        assert!(!s.shows_welcome());
    }

    #[test]
    fn completion_of_latest_starts_reveal() {
        let mut s = with_document();
        let id = ask(&mut s, "q");
        let now = Instant::now();
        s.apply_update(id, chunk("Take 10 mg."), now);
        assert_eq!(s.role_of(id), Some(RenderRole::Thinking));
        s.apply_update(id, end(), now);
        assert_eq!(s.role_of(id), Some(RenderRole::Typing));

        s.tick(now + Duration::from_secs(1));
        assert_eq!(s.reveal.visible(), "Take 10 mg.");
        assert_eq!(s.role_of(id), Some(RenderRole::Static));
    }

    #[test]
    fn non_latest_completion_is_static() {
        let mut s = with_document();
        let first = ask(&mut s, "first");
        let second = ask(&mut s, "second");
        let now = Instant::now();
        s.apply_update(first, chunk("one"), now);
        s.apply_update(first, end(), now);
        assert_eq!(s.role_of(first), Some(RenderRole::Static));
        assert_eq!(s.role_of(second), Some(RenderRole::Thinking));
    }

    #[test]
    fn new_question_stops_previous_reveal() {
        let mut s = with_document();
        let first = ask(&mut s, "first");
        let now = Instant::now();
        s.apply_update(first, chunk("a long answer"), now);
        s.apply_update(first, end(), now);
        assert_eq!(s.role_of(first), Some(RenderRole::Typing));
        ask(&mut s, "second");
        assert_eq!(s.role_of(first), Some(RenderRole::Static));
    }

    #[test]
    fn failure_sets_banner_and_error_answer() {
        let mut s = with_document();
        let id = ask(&mut s, "q");
        s.apply_update(id, EntryUpdate::Failed("HTTP error! status: 500".into()), Instant::now());
        assert_eq!(s.status, "Failed to get response: HTTP error! status: 500");
        assert!(s.status_is_error);
        assert_eq!(s.ledger.get(id).unwrap().answer, "Error: HTTP error! status: 500");
        assert_eq!(s.role_of(id), Some(RenderRole::Failed));
    }

    #[test]
    fn status_expires() {
        let mut s = with_document();
        s.set_status("Copied", false);
        let set = s.status_set_at.unwrap();
        s.tick(set + STATUS_TIMEOUT - Duration::from_millis(1));
        assert_eq!(s.status, "Copied");
        s.tick(set + STATUS_TIMEOUT);
        assert!(s.status.is_empty());
    }

    #[test]
    fn switching_document_orphans_in_flight_answers() {
        let mut s = with_document();
        let id = ask(&mut s, "q");
        s.go_to_page(9);
        s.open_document(&journal("neuro"));
        assert!(s.ledger.is_empty());
        assert_eq!(s.document.as_ref().unwrap().page, 1);

        s.apply_update(id, chunk("late"), Instant::now());
        s.apply_update(id, end(), Instant::now());
        assert!(s.ledger.is_empty());
        assert!(s.status.is_empty());

        let fresh = ask(&mut s, "again");
        assert!(fresh > id);
    }

    #[test]
    fn latest_cited_page_skips_unfinished() {
        let mut s = with_document();
        let first = ask(&mut s, "first");
        let now = Instant::now();
        s.apply_update(first, chunk("See dosing. Page no: 14"), now);
        s.apply_update(first, end(), now);
        let second = ask(&mut s, "second");
        s.apply_update(second, chunk("Page no: 99"), now);
        assert_eq!(s.latest_cited_page(), Some(14));
        assert_eq!(s.latest_answer(), Some("See dosing. Page no: 14"));
    }

    #[test]
    fn page_never_below_one() {
        let mut s = with_document();
        s.step_page(-3);
        assert_eq!(s.document.as_ref().unwrap().page, 1);
        s.step_page(4);
        assert_eq!(s.document.as_ref().unwrap().page, 5);
        assert_eq!(
            s.document.as_ref().unwrap().url_at_page(),
            "http://localhost:8000/pdf/cardio#page=5"
        );
    }

    #[test]
    fn journals_fill_document_opened_by_id() {
        let mut s = TuiState::new(BASE, UiConfig::default());
        s.open_document(&Journal::untitled("cardio"));
        s.go_to_page(3);
        s.set_journals(Ok(vec![journal("neuro"), journal("cardio")]));
        let doc = s.document.as_ref().unwrap();
        assert_eq!(doc.title, "Journal cardio");
        assert_eq!(doc.page, 3);
        assert_eq!(s.journals.items.len(), 2);
    }

    #[test]
    fn journal_failure_is_page_level() {
        let mut s = with_document();
        let id = ask(&mut s, "q");
        s.request_journals();
        s.set_journals(Err("HTTP error! status: 503".into()));
        assert_eq!(s.journals.error.as_deref(), Some("HTTP error! status: 503"));
        assert!(!s.journals.loading);
        assert_eq!(s.ledger.status_of(id), Some(EntryStatus::Pending));
    }

    #[test]
    fn journal_selection_is_bounded() {
        let mut s = TuiState::new(BASE, UiConfig::default());
        s.set_journals(Ok(vec![journal("a"), journal("b")]));
        s.journals.select_next();
        s.journals.select_next();
        assert_eq!(s.journals.selected, 1);
        s.journals.select_prev();
        s.journals.select_prev();
        assert_eq!(s.journals.selected, 0);
        assert!(s.open_selected_journal());
        assert_eq!(s.document.as_ref().unwrap().id, "a");
    }

    #[test]
    fn scroll_up_disables_auto_scroll() {
        let mut s = with_document();
        s.scroll_up(5);
        assert!(!s.auto_scroll);
        s.scroll_down(5);
        assert!(s.auto_scroll);
    }

    #[test]
    fn page_follows_viewport() {
        let mut s = with_document();
        assert_eq!(s.page_lines(), PAGE_SCROLL_LINES);
        s.last_viewport_height = 20;
        assert_eq!(s.page_lines(), 18);
        s.last_viewport_height = 1;
        assert_eq!(s.page_lines(), 1);
    }

    #[test]
    fn trace_lines_capped() {
        let mut s = with_document();
        for i in 0..MAX_TRACE_LINES + 10 {
            s.push_trace_line(format!("line {}", i));
        }
        assert_eq!(s.trace_lines.len(), MAX_TRACE_LINES);
        assert_eq!(s.trace_lines[0], "line 10");
    }

    #[test]
    fn theme_toggle_drops_render_cache() {
        let mut s = with_document();
        s.render_cache.insert(
            EntryId(1),
            CachedEntry {
                revision: 0,
                width: 10,
                role: RenderRole::Static,
                rendered: RenderedEntry::default(),
            },
        );
        s.toggle_theme();
        assert!(s.ui.appearance == Appearance::Light);
        assert!(s.render_cache.is_empty());
    }

    #[test]
    fn hit_regions_resolve_actions() {
        let mut s = with_document();
        s.hit_regions.push((Rect::new(4, 10, 8, 1), ClickAction::GoToPage(3)));
        assert_eq!(s.action_at(5, 10), Some(ClickAction::GoToPage(3)));
        assert_eq!(s.action_at(12, 10), None);
        assert_eq!(s.reference_url("doc-1"), "http://localhost:8000/pdf/doc-1");
    }
}
