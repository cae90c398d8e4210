//! TUI run loop: terminal setup, event handling, draw.
//!
//! Terminal events are read in a dedicated thread so the main loop never blocks
//! on input; answers keep streaming in while the user types or drags.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use docchat_core::{EntryId, EntryUpdate, Journal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;

use crate::layouts::split_pane::NUDGE_STEP;
use crate::messages::ClickAction;
use crate::state::{Screen, TuiRequest, TuiState};
use crate::utils::{PAGE_SCROLL_LINES, POLL_INTERVAL, WHEEL_SCROLL_LINES};
use crate::view;

const RUNTIME_STOPPED: &str = "Runtime stopped; cannot send request";

/// Channels connecting the TUI to the async runtime.
pub struct TuiChannels {
    /// Questions to ask and journal reloads.
    pub requests: tokio_mpsc::UnboundedSender<TuiRequest>,
    /// Stream updates tagged with the entry they belong to.
    pub updates: tokio_mpsc::UnboundedReceiver<(EntryId, EntryUpdate)>,
    /// Results of `/journals` fetches.
    pub journals: tokio_mpsc::UnboundedReceiver<Result<Vec<Journal>, String>>,
    /// Formatted tracing output for the logs screen (Ctrl+D).
    pub logs: Option<tokio_mpsc::Receiver<String>>,
}

/// Work the loop performs outside [TuiState].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    Send(TuiRequest),
    OpenUrl(String),
    CopyLatestAnswer,
}

/// Run the TUI until Ctrl+C. Requests journals on start.
pub fn run_tui(mut state: TuiState, mut channels: TuiChannels) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    state.viewport_cols = terminal.size()?.width;
    state.split.on_resize(state.viewport_cols);
    state.push_trace_line("[log] TUI started. Runtime logs (Ctrl+D) show tracing output.".to_string());
    let initial = state.request_journals();
    dispatch(&mut state, &channels.requests, initial);

    let result = run_loop(&mut terminal, &mut state, &mut channels);

    // Release a held drag capture before leaving the alternate screen.
    state.split.on_focus_lost();
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    channels: &mut TuiChannels,
) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        if let Some(rx) = channels.logs.as_mut() {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        let now = Instant::now();
        while let Ok((id, update)) = channels.updates.try_recv() {
            state.apply_update(id, update, now);
        }
        while let Ok(result) = channels.journals.try_recv() {
            state.set_journals(result);
        }
        state.tick(now);

        if state.needs_redraw {
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        let Ok(ev) = event_rx.try_recv() else {
            std::thread::sleep(POLL_INTERVAL);
            continue;
        };
        for effect in handle_event(state, ev) {
            match effect {
                Effect::Quit => return Ok(()),
                Effect::Send(request) => dispatch(state, &channels.requests, request),
                Effect::OpenUrl(url) => open_url(state, &url),
                Effect::CopyLatestAnswer => copy_latest_answer(state),
            }
        }
    }
}

/// Hands `request` to the runtime. If the runtime is gone the request can never
/// be answered, so it is failed on the spot instead of spinning forever.
fn dispatch(
    state: &mut TuiState,
    requests: &tokio_mpsc::UnboundedSender<TuiRequest>,
    request: TuiRequest,
) {
    let Err(tokio_mpsc::error::SendError(request)) = requests.send(request) else {
        return;
    };
    tracing::error!(?request, "runtime stopped; request dropped");
    match request {
        TuiRequest::LoadJournals => state.set_journals(Err(RUNTIME_STOPPED.to_string())),
        TuiRequest::Ask { entry_id, .. } => state.apply_update(
            entry_id,
            EntryUpdate::Failed(RUNTIME_STOPPED.to_string()),
            Instant::now(),
        ),
    }
    state.set_status(RUNTIME_STOPPED, true);
}

/// Apply one terminal event to `state`, returning the side effects to run.
pub fn handle_event(state: &mut TuiState, ev: Event) -> Vec<Effect> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(cols, _) => {
            state.viewport_cols = cols;
            state.split.on_resize(cols);
            state.needs_redraw = true;
            Vec::new()
        }
        Event::FocusLost => {
            if state.split.on_focus_lost() {
                state.needs_redraw = true;
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_key(state: &mut TuiState, key: KeyEvent) -> Vec<Effect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Global keys.
    match key.code {
        KeyCode::Char('c') if ctrl => return vec![Effect::Quit],
        KeyCode::Char('d') if ctrl => {
            state.screen = match state.screen {
                Screen::Logs if state.document.is_some() => Screen::Main,
                Screen::Logs => Screen::Documents,
                _ => Screen::Logs,
            };
            state.needs_redraw = true;
            return Vec::new();
        }
        KeyCode::Char('t') if ctrl => {
            state.toggle_theme();
            return Vec::new();
        }
        KeyCode::Char('o') if ctrl => {
            state.screen = Screen::Documents;
            return vec![Effect::Send(state.request_journals())];
        }
        _ => {}
    }

    match state.screen {
        Screen::Logs => {
            match key.code {
                KeyCode::Esc => {
                    state.screen = if state.document.is_some() { Screen::Main } else { Screen::Documents };
                    state.needs_redraw = true;
                }
                KeyCode::Up => state.trace_scroll_up(1),
                KeyCode::Down => state.trace_scroll_down(1),
                KeyCode::PageUp => state.trace_scroll_up(PAGE_SCROLL_LINES),
                KeyCode::PageDown => state.trace_scroll_down(PAGE_SCROLL_LINES),
                _ => {}
            }
            Vec::new()
        }
        Screen::Documents => {
            match key.code {
                KeyCode::Up => state.journals.select_prev(),
                KeyCode::Down => state.journals.select_next(),
                KeyCode::Enter => {
                    state.open_selected_journal();
                }
                KeyCode::Char('r') => return vec![Effect::Send(state.request_journals())],
                KeyCode::Esc if state.document.is_some() => state.screen = Screen::Main,
                _ => {}
            }
            state.needs_redraw = true;
            Vec::new()
        }
        Screen::Main => handle_main_key(state, key, ctrl, alt),
    }
}

fn handle_main_key(state: &mut TuiState, key: KeyEvent, ctrl: bool, alt: bool) -> Vec<Effect> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let mut effects = Vec::new();
    match key.code {
        KeyCode::Char('y') if ctrl => effects.push(Effect::CopyLatestAnswer),
        KeyCode::Char('g') if ctrl => match state.latest_cited_page() {
            Some(page) => state.go_to_page(page),
            None => state.set_status("No page cited yet", false),
        },
        KeyCode::Char('u') if ctrl => state.input.clear(),
        KeyCode::Char('k') if ctrl => state.input.kill_to_end(),
        KeyCode::Left if ctrl => state.step_page(-1),
        KeyCode::Right if ctrl => state.step_page(1),
        KeyCode::Left if alt => state.split.nudge(-NUDGE_STEP),
        KeyCode::Right if alt => state.split.nudge(NUDGE_STEP),
        KeyCode::Enter if shift || alt => state.input.insert('\n'),
        KeyCode::Enter => {
            if let Some(request) = state.submit_input() {
                effects.push(Effect::Send(request));
            }
        }
        KeyCode::Char(c @ '1'..='9') if state.input.text().is_empty() && state.shows_welcome() => {
            let index = c as usize - '1' as usize;
            if let Some(request) = state.ask_suggested(index) {
                effects.push(Effect::Send(request));
            }
        }
        KeyCode::Char(c) if !ctrl => state.input.insert(c),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.left(),
        KeyCode::Right => state.input.right(),
        KeyCode::Home => state.input.home(),
        KeyCode::End => state.input.end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(state.page_lines()),
        KeyCode::PageDown => state.scroll_down(state.page_lines()),
        _ => return effects,
    }
    state.needs_redraw = true;
    effects
}

fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) -> Vec<Effect> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if state.screen == Screen::Logs {
                state.trace_scroll_up(WHEEL_SCROLL_LINES);
            } else {
                state.scroll_up(WHEEL_SCROLL_LINES);
            }
        }
        MouseEventKind::ScrollDown => {
            if state.screen == Screen::Logs {
                state.trace_scroll_down(WHEEL_SCROLL_LINES);
            } else {
                state.scroll_down(WHEEL_SCROLL_LINES);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.screen == Screen::Main && state.split.on_mouse_down(col, row) {
                state.needs_redraw = true;
                return Vec::new();
            }
            if let Some(action) = state.action_at(col, row) {
                return click(state, action);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.split.on_mouse_drag(col, row, state.viewport_cols) {
                state.needs_redraw = true;
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.split.on_mouse_up() {
                state.needs_redraw = true;
            }
        }
        _ => {}
    }
    Vec::new()
}

fn click(state: &mut TuiState, action: ClickAction) -> Vec<Effect> {
    tracing::debug!(?action, "click");
    match action {
        ClickAction::OpenReference(id) => vec![Effect::OpenUrl(state.reference_url(&id))],
        ClickAction::GoToPage(page) => {
            state.go_to_page(page);
            Vec::new()
        }
        ClickAction::AskSuggested(index) => state.ask_suggested(index).map(Effect::Send).into_iter().collect(),
        ClickAction::OpenJournal(index) => {
            state.open_journal(index);
            Vec::new()
        }
        ClickAction::OpenDocument => state
            .document
            .as_ref()
            .map(|doc| Effect::OpenUrl(doc.url_at_page()))
            .into_iter()
            .collect(),
    }
}

fn open_url(state: &mut TuiState, url: &str) {
    match open::that(url) {
        Ok(()) => state.set_status(format!("Opened {}", url), false),
        Err(e) => {
            tracing::warn!(error = %e, url, "could not open url");
            state.set_status(format!("Could not open {}", url), true);
        }
    }
}

/// Copy the newest completed answer to the system clipboard (Ctrl+Y).
fn copy_latest_answer(state: &mut TuiState) {
    let Some(text) = state.latest_answer().map(str::to_string) else {
        state.set_status("Nothing to copy yet", false);
        return;
    };
    match cli_clipboard::set_contents(text) {
        Ok(()) => state.set_status("Copied to clipboard", false),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            state.set_status("Clipboard unavailable", true);
        }
    }
}
