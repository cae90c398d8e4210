//! Shortcut hint line below the input.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::DocchatPalette;

/// Inset so the hint aligns with the input content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

pub fn shortcut_inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(SHORTCUT_INSET_H),
        width: area.width.saturating_sub(SHORTCUT_INSET_H.saturating_mul(2)),
        ..area
    }
}

/// What the footer hint should talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutContext {
    Dragging,
    Streaming,
    Typing,
    Welcome,
    Idle,
}

pub fn shortcut_line(palette: &DocchatPalette, context: ShortcutContext) -> Line<'static> {
    let hint = match context {
        ShortcutContext::Dragging => "Release to set the split  ·  Alt+←/→: nudge",
        ShortcutContext::Streaming => "Answering…  ·  Enter: ask another  ·  Ctrl+C: quit",
        ShortcutContext::Typing => "Enter: ask  ·  Shift+Enter: newline  ·  Ctrl+U: clear",
        ShortcutContext::Welcome => "1-9: ask a suggested question  ·  Ctrl+O: documents  ·  Ctrl+C: quit",
        ShortcutContext::Idle => {
            "↑↓: scroll  ·  Ctrl+G: cited page  ·  Ctrl+Y: copy  ·  Ctrl+O: documents  ·  Ctrl+T: theme"
        }
    };
    Line::from(Span::styled(hint, text_muted_style(palette.text_muted)))
}
