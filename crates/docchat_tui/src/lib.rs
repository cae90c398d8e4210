//! docchat-tui: terminal client for asking questions about a document.
//!
//! Theming in `theme`; layout in `layouts` (including the draggable
//! [split_pane](layouts::split_pane)); per-entry renderers in `messages`;
//! state and view in [state] and [view]. Run with [run_tui].

pub mod animation;
pub mod input;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{Effect, TuiChannels, handle_event, run_tui};
pub use state::{Screen, TuiRequest, TuiState, UiConfig};
pub use view::draw as draw_view;
