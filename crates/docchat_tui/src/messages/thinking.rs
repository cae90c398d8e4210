//! Thinking indicator for entries still waiting on their answer.

use ratatui::text::{Line, Span};

use crate::animation::Shimmer;
use crate::layouts::text_muted_style;
use crate::theme::DocchatPalette;
use crate::utils::{LEFT_PADDING, format_count};

pub const THINKING_LABEL: &str = "Thinking…";

/// Shimmering label; once chunks arrive, a muted count of received characters
/// shows the stream is moving.
pub fn thinking_lines(received_chars: usize, shimmer: &Shimmer, palette: &DocchatPalette) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw(LEFT_PADDING)];
    spans.extend(shimmer.spans(THINKING_LABEL, palette));
    if received_chars > 0 {
        spans.push(Span::styled(
            format!("  {} chars received", format_count(received_chars)),
            text_muted_style(palette.text_muted),
        ));
    }
    vec![Line::from(spans)]
}
