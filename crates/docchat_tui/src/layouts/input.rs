//! Question input block.

use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{background_style, border_style};
use crate::theme::DocchatPalette;

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Prompt shown at the start of the first input line.
pub const INPUT_ICON: &str = "▸ ";

/// Input lines shown before the block stops growing.
const MAX_VISIBLE_INPUT_LINES: u16 = 6;

/// Rounded block around the input; the accent border marks it as focused.
pub fn block_for_input(palette: &DocchatPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.status_bar_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}

/// Block height for `text`: borders plus one row per line, capped.
pub fn input_height(text: &str) -> u16 {
    let lines = text.split('\n').count().max(1) as u16;
    lines.min(MAX_VISIBLE_INPUT_LINES) + 2
}
