//! Shimmer: a highlight sweeping left to right over the thinking indicator.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::layouts::rgb_to_color;
use crate::theme::{DocchatPalette, Rgb};

/// Width of the highlight as a fraction of the text length.
const SHIMMER_WIDTH: f64 = 0.35;

/// Sweeps per second.
const SHIMMER_SPEED: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct Shimmer {
    /// Center of the highlight, 0.0 = left edge.
    position: f64,
    last_tick: Instant,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self {
            position: 0.0,
            last_tick: Instant::now(),
        }
    }
}

impl Shimmer {
    /// Advances by elapsed time. Call once per frame while something is in flight.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.position += (elapsed.as_secs_f64() * SHIMMER_SPEED).min(0.1);
        if self.position > 1.0 + SHIMMER_WIDTH {
            self.position -= 1.0 + SHIMMER_WIDTH;
        }
    }

    /// One span per character, muted text brightening toward the accent near
    /// the highlight center.
    pub fn spans(&self, text: &str, palette: &DocchatPalette) -> Vec<Span<'static>> {
        let count = text.chars().count();
        if count == 0 {
            return Vec::new();
        }
        let n = count as f64;
        let half = SHIMMER_WIDTH / 2.0;
        let center = self.position * (1.0 + 2.0 * half) - half;

        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let distance = ((i as f64 + 0.5) / n - center).abs();
                let intensity = if distance <= half {
                    let t = distance / half;
                    1.0 - t * t
                } else {
                    0.0
                };
                Span::styled(c.to_string(), glow(palette.text_muted, palette.accent, intensity))
            })
            .collect()
    }
}

fn glow(from: Rgb, to: Rgb, intensity: f64) -> Style {
    Style::default()
        .fg(rgb_to_color(from.mix(to, intensity as f32)))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn one_span_per_char() {
        let palette = DocchatPalette::docchat_dark();
        let spans = Shimmer::default().spans("Thinking…", &palette);
        assert_eq!(spans.len(), 9);
        assert!(Shimmer::default().spans("", &palette).is_empty());
    }

    #[test]
    fn tick_wraps_position() {
        let mut s = Shimmer::default();
        let start = s.last_tick;
        for i in 1..200 {
            s.tick(start + Duration::from_millis(100 * i));
        }
        assert!(s.position >= 0.0 && s.position <= 1.0 + SHIMMER_WIDTH);
    }
}
