//! Shared utilities for the docchat TUI.
//!
//! - **[constants]**: spacing, padding and timing constants.
//! - **[layout]**: Rect padding, hit testing, scroll clamping.
//! - **[format]**: truncation, wrapping and count formatting.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{format_count, truncate_ellipsis, wrap_lines};
pub use layout::{
    centered_rect, horizontal_padding, horizontal_padding_with, padding, rect_contains,
    scroll_with_buffer,
};
