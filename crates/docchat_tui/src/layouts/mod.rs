//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: header, body and footer strips.
//! - **[split_pane]**: the draggable document/chat divider.
//! - **[panel]**: bordered panel with a padded inner rect.
//! - **[style]**: palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]**: header strip with a status dot.
//! - **[input]**: question input block.
//! - **[shortcut]**: context-aware hint line below the input.

mod head;
mod input;
mod panel;
mod shortcut;
mod split;
pub mod split_pane;
mod style;

pub use head::{HEADER_STATUS_READY, HEADER_TITLE, HeaderStatus, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, block_for_input, input_height};
pub use panel::{PanelLayout, block_for_panel};
pub use shortcut::{ShortcutContext, shortcut_inner_rect, shortcut_line};
pub use split::{HEADER_HEIGHT, MainSplits, main_splits, vertical_split};
pub use split_pane::{
    DragCapture, DragEffects, DragState, STACK_BREAKPOINT_COLS, SplitAxis, SplitPane,
    SplitRegions, TerminalDragEffects,
};
pub use style::{
    background_style, border_style, danger_style, link_style, rgb_to_color, success_style,
    text_muted_style, text_style, warning_style,
};
