//! Map theme palette colors to ratatui styles.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Rgb;

#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

pub fn border_style(border: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border))
}

pub fn background_style(bg: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg))
}

pub fn text_style(text: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text))
}

pub fn text_muted_style(text_muted: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted))
}

pub fn success_style(success: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success))
}

pub fn danger_style(danger: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger))
}

pub fn warning_style(warning: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning))
}

/// Clickable text: references and page markers.
pub fn link_style(link: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(link))
        .add_modifier(Modifier::UNDERLINED)
}
