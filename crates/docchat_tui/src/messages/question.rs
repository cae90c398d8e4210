//! Question rendering: accent left border, `»` indicator, optional time.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{text_muted_style, text_style};
use crate::theme::DocchatPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

pub const QUESTION_INDICATOR: &str = "»";

const QUESTION_LEFT_BORDER: &str = "│ ";

pub fn question_lines(
    text: &str,
    timestamp: Option<&str>,
    palette: &DocchatPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let border = Span::styled(QUESTION_LEFT_BORDER, text_style(palette.accent));
    let mut head = vec![
        border.clone(),
        Span::styled(QUESTION_INDICATOR, text_style(palette.accent)),
        Span::raw(" "),
    ];
    if let Some(t) = timestamp {
        head.push(Span::styled(format!("{} ", t), text_muted_style(palette.text_muted)));
    }
    let head_w: usize = head.iter().map(|s| s.content.width()).sum();
    let cont_w = QUESTION_LEFT_BORDER.width() + LEFT_PADDING.len();
    let wrap_width = width.saturating_sub(head_w.max(cont_w)).max(1);

    let mut segments = wrap_lines(text.trim(), wrap_width).into_iter();
    let first = segments.next().unwrap_or_default();
    head.push(Span::styled(first, text_style(palette.text)));

    let mut lines = vec![Line::from(head)];
    lines.extend(segments.map(|seg| {
        Line::from(vec![
            border.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg, text_style(palette.text)),
        ])
    }));
    lines
}
