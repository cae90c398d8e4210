//! Bordered panel layout: outer area, padded inner area, and a theme-backed block.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};

use super::style::{background_style, border_style, text_muted_style, text_style};
use crate::theme::DocchatPalette;
use crate::utils::{HORIZONTAL_PADDING, padding};

#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Full area including the border.
    pub outer: Rect,
    /// Area after border and padding.
    pub inner: Rect,
}

impl PanelLayout {
    pub fn new(area: Rect, bordered: bool, padding_h: u16, padding_v: u16) -> Self {
        let after_border = if bordered { padding(area, 1, 1) } else { area };
        Self {
            outer: area,
            inner: padding(after_border, padding_h, padding_v),
        }
    }

    pub fn bordered(area: Rect) -> Self {
        Self::new(area, true, HORIZONTAL_PADDING, 0)
    }
}

/// Rounded block with an optional title; focused panels get the accent border.
pub fn block_for_panel(title: &str, palette: &DocchatPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.surface_background));
    if !title.is_empty() {
        let title_style = if focused {
            text_style(palette.text).add_modifier(Modifier::BOLD)
        } else {
            text_muted_style(palette.text_muted)
        };
        block = block.title(Line::from(Span::styled(format!(" {} ", title), title_style)));
    }
    block
}
