//! Header strip: title on the left, status with a colored dot on the right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
    warning_style,
};
use crate::theme::DocchatPalette;
use crate::utils::{horizontal_padding, truncate_ellipsis};

pub const HEADER_TITLE: &str = "docchat";

pub const HEADER_STATUS_READY: &str = "Ready";

/// Drives the dot color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Ready,
    Streaming,
    Error,
}

/// Title (bold) left, "● status" right-aligned within `width` columns.
pub fn header_line(
    title: &str,
    right: &str,
    status: HeaderStatus,
    palette: &DocchatPalette,
    width: u16,
) -> Line<'static> {
    let dot_style = match status {
        HeaderStatus::Error => danger_style(palette.danger),
        HeaderStatus::Streaming => warning_style(palette.warning),
        HeaderStatus::Ready => success_style(palette.success),
    };
    let width = width as usize;
    let right = truncate_ellipsis(right, width / 2);
    let right_w = 2 + right.width();
    let title = truncate_ellipsis(title, width.saturating_sub(right_w + 1));
    let gap = width.saturating_sub(title.width() + right_w);
    Line::from(vec![
        Span::styled(title, text_style(palette.text).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ", dot_style),
        Span::styled(right, text_muted_style(palette.text_muted)),
    ])
}

/// Draws the two-line header: content line, then bottom border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &DocchatPalette,
    title: &str,
    right: &str,
    status: HeaderStatus,
) {
    let inner = horizontal_padding(area);
    let bg = background_style(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(bg);
    let line = header_line(title, right, status, palette, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), inner);
}
