//! Failed entry rendering: ✗ icon and the error text in danger style.

use ratatui::text::{Line, Span};

use crate::layouts::danger_style;
use crate::theme::DocchatPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

pub fn error_lines(text: &str, palette: &DocchatPalette, width: usize) -> Vec<Line<'static>> {
    let style = danger_style(palette.danger);
    let wrap_width = width.saturating_sub(LEFT_PADDING.len() + 2).max(1);
    let mut segments = wrap_lines(text.trim(), wrap_width).into_iter();

    let first = segments.next().unwrap_or_default();
    let mut lines = vec![Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled("✗ ", style),
        Span::styled(first, style),
    ])];
    lines.extend(segments.map(|seg| {
        Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::raw("  "),
            Span::styled(seg, style),
        ])
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_danger_icon() {
        let palette = DocchatPalette::docchat_dark();
        let lines = error_lines("Error: stream error: connection reset", &palette, 60);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("✗")));
    }

    #[test]
    fn error_wraps_long_text() {
        let palette = DocchatPalette::docchat_dark();
        let lines = error_lines(
            "Error: error sending request for url (http://localhost:8000/ask): connection refused",
            &palette,
            30,
        );
        assert!(lines.len() > 1);
    }

    #[test]
    fn error_empty_text() {
        let palette = DocchatPalette::docchat_dark();
        assert!(!error_lines("", &palette, 40).is_empty());
    }
}
