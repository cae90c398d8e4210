//! Character-by-character reveal of a completed answer.

use std::time::{Duration, Instant};

use crate::entry::EntryId;

pub const DEFAULT_CADENCE: Duration = Duration::from_millis(8);

#[derive(Debug)]
pub struct TypingReveal {
    cadence: Duration,
    identity: Option<EntryId>,
    text: String,
    total_chars: usize,
    shown_chars: usize,
    shown_bytes: usize,
    started_at: Instant,
}

impl Default for TypingReveal {
    fn default() -> Self {
        Self::new(DEFAULT_CADENCE)
    }
}

impl TypingReveal {
    pub fn new(cadence: Duration) -> Self {
        Self {
            cadence: cadence.max(Duration::from_micros(1)),
            identity: None,
            text: String::new(),
            total_chars: 0,
            shown_chars: 0,
            shown_bytes: 0,
            started_at: Instant::now(),
        }
    }

    /// Points the reveal at `text` for entry `id`. A new identity restarts
    /// from an empty prefix; the same identity keeps its progress.
    pub fn sync(&mut self, id: EntryId, text: &str, now: Instant) {
        if self.identity == Some(id) {
            if self.text != text {
                self.text = text.to_string();
                self.total_chars = self.text.chars().count();
                self.set_shown(self.shown_chars.min(self.total_chars));
            }
            return;
        }
        self.identity = Some(id);
        self.text = text.to_string();
        self.total_chars = self.text.chars().count();
        self.shown_chars = 0;
        self.shown_bytes = 0;
        self.started_at = now;
    }

    pub fn reset(&mut self) {
        self.identity = None;
        self.text.clear();
        self.total_chars = 0;
        self.shown_chars = 0;
        self.shown_bytes = 0;
    }

    /// Reveals every character whose slot has elapsed by `now`. Returns true
    /// when the visible prefix grew.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.identity.is_none() || self.is_done() {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let due = (elapsed.as_micros() / self.cadence.as_micros()) as usize;
        let target = due.min(self.total_chars);
        if target <= self.shown_chars {
            return false;
        }
        self.set_shown(target);
        true
    }

    fn set_shown(&mut self, chars: usize) {
        self.shown_chars = chars;
        self.shown_bytes = self
            .text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
    }

    pub fn identity(&self) -> Option<EntryId> {
        self.identity
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown_bytes]
    }

    pub fn is_done(&self) -> bool {
        self.shown_chars >= self.total_chars
    }

    pub fn is_revealing(&self, id: EntryId) -> bool {
        self.identity == Some(id) && !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_empty_and_reveals_one_char_per_cadence() {
        let t0 = Instant::now();
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(1), "Hello", t0);
        assert_eq!(reveal.visible(), "");

        assert!(reveal.advance(t0 + ms(8)));
        assert_eq!(reveal.visible(), "H");
        reveal.advance(t0 + ms(24));
        assert_eq!(reveal.visible(), "Hel");
    }

    #[test]
    fn catches_up_after_a_slow_frame() {
        let t0 = Instant::now();
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(1), "Hello", t0);
        reveal.advance(t0 + ms(500));
        assert_eq!(reveal.visible(), "Hello");
        assert!(reveal.is_done());
        assert!(!reveal.advance(t0 + ms(600)));
    }

    #[test]
    fn same_identity_keeps_progress() {
        let t0 = Instant::now();
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(1), "abcdef", t0);
        reveal.advance(t0 + ms(16));
        reveal.sync(EntryId(1), "abcdef", t0 + ms(20));
        assert_eq!(reveal.visible(), "ab");
    }

    #[test]
    fn new_identity_restarts() {
        let t0 = Instant::now();
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(1), "abcdef", t0);
        reveal.advance(t0 + ms(40));
        reveal.sync(EntryId(2), "xyz", t0 + ms(40));
        assert_eq!(reveal.visible(), "");
        assert!(reveal.is_revealing(EntryId(2)));
        assert!(!reveal.is_revealing(EntryId(1)));
    }

    #[test]
    fn multibyte_prefix_stays_on_char_boundary() {
        let t0 = Instant::now();
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(1), "héllo→", t0);
        reveal.advance(t0 + ms(16));
        assert_eq!(reveal.visible(), "hé");
        reveal.advance(t0 + ms(48));
        assert_eq!(reveal.visible(), "héllo→");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut reveal = TypingReveal::default();
        reveal.sync(EntryId(4), "", Instant::now());
        assert!(reveal.is_done());
    }
}
