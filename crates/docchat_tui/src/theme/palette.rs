//! docchat palette: semantic color roles for surfaces, borders, text and chrome.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance. All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct DocchatPalette {
    // --- Surfaces
    pub background: Rgb,
    /// Document pane, cards.
    pub surface_background: Rgb,
    /// References box, selected document row.
    pub elevated_surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_accent: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    /// Clickable references and page markers.
    pub link: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
    pub scrollbar_thumb_background: Rgb,
    pub scrollbar_track_background: Rgb,
    /// Split divider at rest and while dragged.
    pub divider: Rgb,
    pub divider_active: Rgb,
}

impl DocchatPalette {
    pub fn docchat_dark() -> Self {
        Self {
            background: Rgb(15, 15, 15),
            surface_background: Rgb(26, 26, 26),
            elevated_surface_background: Rgb(42, 42, 42),
            border: Rgb(51, 51, 51),
            border_focused: Rgb(255, 145, 77),
            text: Rgb(233, 236, 239),
            text_muted: Rgb(136, 136, 136),
            text_placeholder: Rgb(108, 117, 125),
            text_accent: Rgb(255, 145, 77),
            accent: Rgb(255, 145, 77),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
            link: Rgb(96, 165, 250),
            status_bar_background: Rgb(26, 26, 26),
            scrollbar_thumb_background: Rgb(86, 86, 96),
            scrollbar_track_background: Rgb(22, 22, 22),
            divider: Rgb(51, 51, 51),
            divider_active: Rgb(255, 107, 53),
        }
    }

    pub fn docchat_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 249, 250),
            elevated_surface_background: Rgb(233, 236, 239),
            border: Rgb(222, 226, 230),
            border_focused: Rgb(255, 107, 53),
            text: Rgb(33, 37, 41),
            text_muted: Rgb(108, 117, 125),
            text_placeholder: Rgb(173, 181, 189),
            text_accent: Rgb(255, 107, 53),
            accent: Rgb(255, 107, 53),
            danger: Rgb(220, 53, 69),
            success: Rgb(40, 167, 69),
            warning: Rgb(224, 150, 40),
            link: Rgb(37, 99, 235),
            status_bar_background: Rgb(248, 249, 250),
            scrollbar_thumb_background: Rgb(173, 181, 189),
            scrollbar_track_background: Rgb(248, 249, 250),
            divider: Rgb(222, 226, 230),
            divider_active: Rgb(255, 107, 53),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::docchat_dark(),
            Appearance::Light => Self::docchat_light(),
        }
    }
}
