//! TUI view: header (fixed top), document pane and chat pane around the split
//! divider, input and shortcut hint (fixed bottom).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    HEADER_STATUS_READY, HEADER_TITLE, HeaderStatus, INPUT_ICON, PanelLayout, ShortcutContext,
    SplitAxis, background_style, block_for_input, block_for_panel, border_style, danger_style,
    input_height, link_style, main_splits, render_header, rgb_to_color, shortcut_inner_rect,
    shortcut_line, text_muted_style, text_style, vertical_split,
};
use crate::messages::{ClickAction, RenderContext, RenderRole, render_entry};
use crate::state::{CachedEntry, Screen, TuiState};
use crate::utils::{
    LEFT_PADDING, MESSAGE_SPACING_LINES, centered_rect, padding, scroll_with_buffer,
    truncate_ellipsis, wrap_lines,
};

/// Draw the current screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    state.hit_regions.clear();
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Documents => draw_documents(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

fn header_status(state: &TuiState) -> (String, HeaderStatus) {
    if !state.status.is_empty() {
        let kind = if state.status_is_error {
            HeaderStatus::Error
        } else {
            HeaderStatus::Ready
        };
        return (state.status.clone(), kind);
    }
    match state.ledger.outstanding() {
        0 => (HEADER_STATUS_READY.to_string(), HeaderStatus::Ready),
        1 => ("Answering…".to_string(), HeaderStatus::Streaming),
        n => (format!("Answering {} questions…", n), HeaderStatus::Streaming),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_logs(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let palette = &state.ui.palette;
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    let max_scroll = scroll_with_buffer(usize::MAX, state.trace_lines.len(), viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    // trace_scroll counts lines up from the newest.
    let offset = max_scroll - state.trace_scroll;

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|s| {
            let style = if s.starts_with("[ERROR]") || s.starts_with("[WARN]") {
                danger_style(palette.danger)
            } else {
                text_muted_style(palette.text_muted)
            };
            Line::from(Span::styled(s.clone(), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Document picker: one card per journal, or the page-level fetch error.
fn draw_documents(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area, 1);
    let palette = state.ui.palette.clone();
    let (status, kind) = header_status(state);
    render_header(
        frame,
        splits.header,
        &palette,
        &format!("{} · Documents", HEADER_TITLE),
        &status,
        kind,
    );
    frame.render_widget(
        Block::default().style(background_style(palette.background)),
        splits.body,
    );
    let body = padding(splits.body, 2, 1);

    if let Some(error) = &state.journals.error {
        let lines = vec![
            Line::from(Span::styled(
                "Could not load documents",
                danger_style(palette.danger).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(error.clone(), text_muted_style(palette.text_muted))),
            Line::from(""),
            Line::from(Span::styled("r: retry", text_muted_style(palette.text_muted))),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            centered_rect(body, 70, 7),
        );
    } else if state.journals.items.is_empty() {
        let message = if state.journals.loading {
            "Loading documents…"
        } else {
            "No documents available."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, text_muted_style(palette.text_muted)))
                .alignment(Alignment::Center),
            centered_rect(body, 40, 1),
        );
    } else {
        const CARD_HEIGHT: u16 = 3;
        let visible = (body.height / CARD_HEIGHT).max(1) as usize;
        let first = state.journals.selected.saturating_sub(visible - 1);
        let width = body.width as usize;
        for (slot, (index, journal)) in state
            .journals
            .items
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let rect = Rect {
                y: body.y + slot as u16 * CARD_HEIGHT,
                height: CARD_HEIGHT - 1,
                ..body
            };
            let selected = index == state.journals.selected;
            let (marker, bg) = if selected {
                ("▸ ", background_style(palette.elevated_surface_background))
            } else {
                ("  ", Style::default())
            };
            let title = if journal.title.is_empty() { &journal.id } else { &journal.title };
            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, text_style(palette.accent)),
                    Span::styled(
                        truncate_ellipsis(title, width.saturating_sub(2)),
                        text_style(palette.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(LEFT_PADDING),
                    Span::styled(
                        truncate_ellipsis(&journal.desc, width.saturating_sub(2)),
                        text_muted_style(palette.text_muted),
                    ),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).style(bg), rect);
            state.hit_regions.push((rect, ClickAction::OpenJournal(index)));
        }
    }

    let hint = if state.document.is_some() {
        "↑↓: select  ·  Enter: open  ·  r: reload  ·  Esc: back  ·  Ctrl+C: quit"
    } else {
        "↑↓: select  ·  Enter: open  ·  r: reload  ·  Ctrl+C: quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, text_muted_style(palette.text_muted))),
        shortcut_inner_rect(splits.footer),
    );
}

/// Document pane and chat pane split by the divider; input at the bottom.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let input_h = input_height(state.input.text());
    let splits = main_splits(area, input_h + 1);

    let (status, kind) = header_status(state);
    let title = match &state.document {
        Some(doc) => format!("{} · {}", HEADER_TITLE, doc.title),
        None => HEADER_TITLE.to_string(),
    };
    render_header(frame, splits.header, &state.ui.palette, &title, &status, kind);

    let regions = state.split.layout(splits.body, area.width);
    draw_document_pane(frame, state, regions.document);
    draw_divider(frame, state, regions.divider, regions.axis);
    draw_chat(frame, state, regions.chat);
    draw_footer(frame, state, splits.footer, input_h);
}

fn draw_document_pane(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette = &state.ui.palette;
    let block = block_for_panel("Document", palette, false);
    let layout = PanelLayout::bordered(area);
    frame.render_widget(block, area);
    let inner = layout.inner;
    let width = inner.width as usize;

    let Some(doc) = &state.document else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No document selected. Ctrl+O to pick one.",
                text_muted_style(palette.text_muted),
            ))
            .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    };

    let mut lines = vec![Line::from("")];
    for seg in wrap_lines(&doc.title, width) {
        lines.push(Line::from(Span::styled(
            seg,
            text_style(palette.text).add_modifier(Modifier::BOLD),
        )));
    }
    for seg in wrap_lines(&doc.desc, width) {
        lines.push(Line::from(Span::styled(seg, text_muted_style(palette.text_muted))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Page ", text_muted_style(palette.text_muted)),
        Span::styled(
            doc.page.to_string(),
            text_style(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    let link_row = lines.len();
    let url = truncate_ellipsis(&doc.url_at_page(), width);
    let url_width = url.width() as u16;
    lines.push(Line::from(Span::styled(url, link_style(palette.link))));
    lines.push(Line::from(""));
    for hint in [
        "Click the link to open the document at this page.",
        "Ctrl+←/→: previous/next page",
        "Ctrl+G: page cited by the latest answer",
    ] {
        for seg in wrap_lines(hint, width) {
            lines.push(Line::from(Span::styled(seg, text_muted_style(palette.text_muted))));
        }
    }

    if (link_row as u16) < inner.height {
        let rect = Rect::new(inner.x, inner.y + link_row as u16, url_width, 1);
        state.hit_regions.push((rect, ClickAction::OpenDocument));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Divider line with a grip in the middle; highlighted while dragged.
fn draw_divider(frame: &mut Frame, state: &TuiState, area: Rect, axis: SplitAxis) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette = &state.ui.palette;
    let color = if state.split.is_dragging() {
        palette.divider_active
    } else {
        palette.divider
    };
    let line_style = Style::default().fg(rgb_to_color(color));
    let grip_style = Style::default().fg(rgb_to_color(palette.accent));

    match axis {
        SplitAxis::Horizontal => {
            let mid = area.height / 2;
            let lines: Vec<Line> = (0..area.height)
                .map(|row| {
                    if row + 1 >= mid && row <= mid + 1 {
                        Line::from(Span::styled("┃", grip_style))
                    } else {
                        Line::from(Span::styled("│", line_style))
                    }
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), area);
        }
        SplitAxis::Vertical => {
            let width = area.width as usize;
            let grip = 6.min(width);
            let left = (width - grip) / 2;
            let line = Line::from(vec![
                Span::styled("─".repeat(left), line_style),
                Span::styled("━".repeat(grip), grip_style),
                Span::styled("─".repeat(width - left - grip), line_style),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn draw_chat(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let block = block_for_panel("Chat", &state.ui.palette, true);
    let inner = padding(block.inner(area), 1, 0);
    frame.render_widget(block, area);

    if state.shows_welcome() {
        draw_welcome(frame, state, inner);
        return;
    }

    // Leave the last column for the scrollbar.
    let width = inner.width.saturating_sub(1) as usize;
    let viewport_height = inner.height as usize;

    let mut all_lines: Vec<Line<'static>> = Vec::new();
    let mut targets = Vec::new();
    {
        let ctx = RenderContext {
            palette: &state.ui.palette,
            width,
            shimmer: &state.shimmer,
            revealed: state.reveal.visible(),
        };
        for entry in state.ledger.entries() {
            let role = RenderRole::for_entry(entry, state.reveal.is_revealing(entry.id));
            let rendered = if role.is_cacheable() {
                match state.render_cache.get(&entry.id) {
                    Some(cached) if cached.matches(entry.revision, width, role) => {
                        cached.rendered.clone()
                    }
                    _ => {
                        let rendered = render_entry(entry, role, &ctx);
                        state.render_cache.insert(
                            entry.id,
                            CachedEntry {
                                revision: entry.revision,
                                width,
                                role,
                                rendered: rendered.clone(),
                            },
                        );
                        rendered
                    }
                }
            } else {
                render_entry(entry, role, &ctx)
            };

            if !all_lines.is_empty() {
                all_lines.extend(std::iter::repeat_n(Line::from(""), MESSAGE_SPACING_LINES));
            }
            let base = all_lines.len();
            targets.extend(rendered.targets.into_iter().map(|mut t| {
                t.line += base;
                t
            }));
            all_lines.extend(rendered.lines);
        }
    }

    let content_height = all_lines.len();
    // state.scroll is lines scrolled up from the bottom (0 = newest in view).
    let max_scroll = scroll_with_buffer(usize::MAX, content_height, viewport_height);
    state.scroll = state.scroll.min(max_scroll);
    state.last_viewport_height = viewport_height;
    let offset_from_top = max_scroll - state.scroll;

    for t in targets {
        if t.line < offset_from_top || t.line >= offset_from_top + viewport_height {
            continue;
        }
        let rect = Rect::new(
            inner.x + t.start_col,
            inner.y + (t.line - offset_from_top) as u16,
            t.end_col.saturating_sub(t.start_col),
            1,
        );
        state.hit_regions.push((rect, t.action));
    }

    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if content_height > viewport_height {
        draw_scrollbar(frame, state, inner, content_height, offset_from_top, max_scroll);
    }
}

fn draw_scrollbar(
    frame: &mut Frame,
    state: &TuiState,
    inner: Rect,
    content_height: usize,
    offset_from_top: usize,
    max_scroll: usize,
) {
    let palette = &state.ui.palette;
    let viewport = inner.height as f64;
    let thumb_height = ((viewport * viewport / (content_height as f64).max(1.0)).ceil() as u16).max(1);
    let ratio = if max_scroll == 0 {
        1.0
    } else {
        offset_from_top as f64 / max_scroll as f64
    };
    let thumb_y = (ratio * (viewport - thumb_height as f64)).round() as u16;
    let track = Rect {
        x: inner.x + inner.width.saturating_sub(1),
        width: 1,
        ..inner
    };
    frame.render_widget(
        Block::default().style(background_style(palette.scrollbar_track_background)),
        track,
    );
    let thumb = Rect {
        y: track.y + thumb_y,
        height: thumb_height.min(track.height),
        ..track
    };
    frame.render_widget(
        Block::default().style(background_style(palette.scrollbar_thumb_background)),
        thumb,
    );
}

/// Before the first question: document summary and numbered suggestions.
fn draw_welcome(frame: &mut Frame, state: &mut TuiState, inner: Rect) {
    let palette = &state.ui.palette;
    let width = inner.width as usize;
    let Some(doc) = &state.document else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Pick a document to begin (Ctrl+O).",
                text_muted_style(palette.text_muted),
            ))
            .alignment(Alignment::Center),
            centered_rect(inner, inner.width, 1),
        );
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate_ellipsis(&doc.title, width),
            text_style(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let mut regions = Vec::new();
    if doc.default_questions.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask a question about this document.",
            text_muted_style(palette.text_muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Suggested questions",
            text_muted_style(palette.text_muted),
        )));
        for (i, question) in doc.default_questions.iter().enumerate() {
            let number = format!("{}  ", i + 1);
            let body_width = width.saturating_sub(LEFT_PADDING.len() + number.width()).max(1);
            for (j, seg) in wrap_lines(question, body_width).into_iter().enumerate() {
                let row = lines.len() as u16;
                let prefix = if j == 0 { number.clone() } else { " ".repeat(number.width()) };
                let seg_width = seg.width() as u16;
                lines.push(Line::from(vec![
                    Span::raw(LEFT_PADDING),
                    Span::styled(prefix, text_style(palette.accent)),
                    Span::styled(seg, link_style(palette.text)),
                ]));
                if row < inner.height {
                    let x = inner.x + (LEFT_PADDING.len() + number.width()) as u16;
                    regions.push((Rect::new(x, inner.y + row, seg_width, 1), ClickAction::AskSuggested(i)));
                }
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "…or type your own question below.",
            text_muted_style(palette.text_muted),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
    state.hit_regions.extend(regions);
}

fn draw_footer(frame: &mut Frame, state: &TuiState, footer: Rect, input_h: u16) {
    let palette = &state.ui.palette;
    let (input_rect, shortcut_rect) = vertical_split(footer, input_h);

    let block = block_for_input(palette, !state.split.is_dragging());
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let icon_width = INPUT_ICON.width();
    let rows = inner.height.max(1) as usize;
    let (cursor_line, cursor_col) = state.input.cursor_position();
    let skip = cursor_line.saturating_sub(rows - 1);

    let lines: Vec<Line> = if state.input.text().is_empty() {
        let placeholder = if state.document.is_some() {
            "Ask about this document…"
        } else {
            "Pick a document first (Ctrl+O)"
        };
        vec![Line::from(vec![
            Span::styled(INPUT_ICON, text_style(palette.accent)),
            Span::styled(placeholder, text_style(palette.text_placeholder)),
        ])]
    } else {
        state
            .input
            .text()
            .split('\n')
            .enumerate()
            .skip(skip)
            .take(rows)
            .map(|(i, line)| {
                let prefix = if i == 0 { INPUT_ICON.to_string() } else { " ".repeat(icon_width) };
                Line::from(vec![
                    Span::styled(prefix, text_style(palette.accent)),
                    Span::styled(line.to_string(), text_style(palette.text)),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), inner);

    if !state.split.is_dragging() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (icon_width + cursor_col).min(inner.width as usize - 1) as u16;
        let y = inner.y + (cursor_line - skip) as u16;
        frame.set_cursor_position((x, y));
    }

    let context = if state.split.is_dragging() {
        ShortcutContext::Dragging
    } else if state.is_in_flight() {
        ShortcutContext::Streaming
    } else if !state.input.is_blank() {
        ShortcutContext::Typing
    } else if state.shows_welcome() && state.document.is_some() {
        ShortcutContext::Welcome
    } else {
        ShortcutContext::Idle
    };
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, context)),
        shortcut_inner_rect(shortcut_rect),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UiConfig;
    use docchat_core::{EntryUpdate, Journal, Reference, StreamEvent, TotalTokens};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn render(state: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, state, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state_with_answer(answer: &str) -> TuiState {
        let mut s = TuiState::new("http://localhost:8000", UiConfig::default());
        s.open_document(&Journal::untitled("cardio"));
        s.input.insert_str("What is the dosage?");
        let Some(crate::state::TuiRequest::Ask { entry_id, .. }) = s.submit_input() else {
            panic!("expected ask request");
        };
        let now = Instant::now();
        s.apply_update(entry_id, EntryUpdate::Event(StreamEvent::chunk(answer)), now);
        s.apply_update(
            entry_id,
            EntryUpdate::Event(StreamEvent::end(
                vec![Reference::new("cardio", "Cardiology Guide")],
                Some(TotalTokens::Count(321)),
            )),
            now,
        );
        s.tick(now + Duration::from_secs(5));
        s
    }

    #[test]
    fn documents_screen_shows_fetch_error() {
        let mut s = TuiState::new("http://localhost:8000", UiConfig::default());
        s.set_journals(Err("HTTP error! status: 503".into()));
        let screen = render(&mut s, 100, 20);
        assert!(screen.contains("Could not load documents"));
        assert!(screen.contains("HTTP error! status: 503"));
    }

    #[test]
    fn documents_screen_lists_journals_with_click_targets() {
        let mut s = TuiState::new("http://localhost:8000", UiConfig::default());
        s.set_journals(Ok(vec![Journal::untitled("cardio"), Journal::untitled("neuro")]));
        let screen = render(&mut s, 100, 20);
        assert!(screen.contains("cardio"));
        assert!(screen.contains("neuro"));
        assert!(s.hit_regions.iter().any(|(_, a)| *a == ClickAction::OpenJournal(1)));
    }

    #[test]
    fn wide_terminal_shows_panes_side_by_side() {
        let mut s = state_with_answer("Take 10 mg daily. Page no: 12");
        let screen = render(&mut s, 120, 30);
        assert!(screen.contains("Document"));
        assert!(screen.contains("Chat"));
        assert!(screen.contains("Page no: 12"));
        assert!(screen.contains("Total tokens used: 321"));
        assert!(screen.contains("Cardiology Guide"));

        let regions = s.split.regions();
        assert_eq!(regions.axis, SplitAxis::Horizontal);
        assert!(regions.chat.x > regions.document.x);
    }

    #[test]
    fn narrow_terminal_stacks_panes() {
        let mut s = state_with_answer("Short answer.");
        render(&mut s, 80, 40);
        let regions = s.split.regions();
        assert_eq!(regions.axis, SplitAxis::Vertical);
        assert!(regions.chat.y > regions.document.y);
    }

    #[test]
    fn visible_page_marker_and_reference_are_clickable() {
        let mut s = state_with_answer("Take 10 mg daily. Page no: 12");
        render(&mut s, 120, 30);
        let page = s
            .hit_regions
            .iter()
            .find(|(_, a)| *a == ClickAction::GoToPage(12))
            .map(|(r, _)| *r)
            .expect("page marker region");
        assert_eq!(s.action_at(page.x, page.y), Some(ClickAction::GoToPage(12)));
        assert!(s
            .hit_regions
            .iter()
            .any(|(_, a)| *a == ClickAction::OpenReference("cardio".into())));
        assert!(s.hit_regions.iter().any(|(_, a)| *a == ClickAction::OpenDocument));
    }

    #[test]
    fn static_entries_are_cached_by_revision() {
        let mut s = state_with_answer("Cached answer.");
        render(&mut s, 120, 30);
        let id = s.ledger.latest_id().unwrap();
        let cached = s.render_cache.get(&id).expect("cached entry");
        assert_eq!(cached.role, RenderRole::Static);
        assert_eq!(cached.revision, s.ledger.get(id).unwrap().revision);
    }

    #[test]
    fn welcome_lists_suggestions() {
        let mut s = TuiState::new("http://localhost:8000", UiConfig::default());
        let journal: Journal = serde_json::from_value(serde_json::json!({
            "id": "cardio",
            "title": "Cardiology Guide",
            "defaultDocumentQuestions": [{"id": "1", "Question": "What is the dosage?"}]
        }))
        .unwrap();
        s.open_document(&journal);
        let screen = render(&mut s, 120, 30);
        assert!(screen.contains("Suggested questions"));
        assert!(screen.contains("1  What is the dosage?"));
        assert!(s.hit_regions.iter().any(|(_, a)| *a == ClickAction::AskSuggested(0)));
    }

    #[test]
    fn logs_screen_shows_trace_lines() {
        let mut s = TuiState::new("http://localhost:8000", UiConfig::default());
        s.screen = Screen::Logs;
        s.push_trace_line("[WARN] docchat_client::ndjson: discarding record".into());
        let screen = render(&mut s, 100, 10);
        assert!(screen.contains("Runtime logs"));
        assert!(screen.contains("discarding record"));
    }
}
