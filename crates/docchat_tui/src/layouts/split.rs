//! Split the terminal area into header, body and footer regions.

use ratatui::layout::Rect;

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// May have zero height if the terminal is too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into a fixed header, the body, and a footer of `footer_height`
/// rows (the input grows with multi-line questions).
pub fn main_splits(area: Rect, footer_height: u16) -> MainSplits {
    let (header, rest) = vertical_split(area, HEADER_HEIGHT);
    let body_h = rest.height.saturating_sub(footer_height);
    let (body, footer) = vertical_split(rest, body_h);
    MainSplits {
        header,
        body,
        footer,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let top = Rect {
        height: top_h,
        ..area
    };
    let bottom = Rect {
        y: area.y.saturating_add(top_h),
        height: area.height - top_h,
        ..area
    };
    (top, bottom)
}
