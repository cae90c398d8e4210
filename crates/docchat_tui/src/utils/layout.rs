//! Rect helpers: padding, hit testing and scroll clamping.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    padding(area, pad, 0)
}

/// Apply padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// True if the cell `(column, row)` lies inside `area`.
#[inline]
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && (column as u32) < area.x as u32 + area.width as u32
        && (row as u32) < area.y as u32 + area.height as u32
}

/// Clamp a scroll offset so the last line can sit at the bottom of the viewport
/// but never further.
pub fn scroll_with_buffer(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}
