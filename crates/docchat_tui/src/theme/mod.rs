//! docchat theme: semantic color palette for the TUI.
//!
//! Roles are semantic (surfaces, borders, text, accents, chrome) so views never
//! hard-code colors. The palette is passed to every renderer through
//! [`UiConfig`](crate::state::UiConfig).
//!
//! # Example
//!
//! ```ignore
//! use docchat_tui::theme::{Appearance, DocchatPalette};
//!
//! let palette = DocchatPalette::docchat_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = DocchatPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::DocchatPalette;
pub use rgb::Rgb;
