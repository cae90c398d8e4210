//! TUI spacing, sizing and timing constants.

use std::time::Duration;

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for panel content (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between conversation entries.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Lines moved per PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 10;

/// Lines moved per mouse wheel tick.
pub const WHEEL_SCROLL_LINES: usize = 3;

/// How long a transient status banner stays up.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval of the input thread, and the idle frame interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Cap on lines kept for the log screen.
pub const MAX_TRACE_LINES: usize = 2000;

/// Default questions offered on the welcome panel (digits 1-9).
pub const MAX_DEFAULT_QUESTIONS: usize = 9;
