//! Text helpers for fixed-width rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to at most `max_width` display columns, ending in "…" when cut.
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wraps `s` to lines of at most `width` display columns. Existing
/// newlines are kept as hard breaks, so blank lines survive as empty strings.
/// Words wider than `width` are split.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for paragraph in s.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        let mut line = String::new();
        let mut line_w = 0;
        for word in paragraph.split_whitespace() {
            let word_w = word.width();
            if line_w > 0 && line_w + 1 + word_w <= width {
                line.push(' ');
                line.push_str(word);
                line_w += 1 + word_w;
                continue;
            }
            if line_w > 0 {
                out.push(std::mem::take(&mut line));
                line_w = 0;
            }
            if word_w <= width {
                line.push_str(word);
                line_w = word_w;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_w + w > width {
                        out.push(std::mem::take(&mut line));
                        line_w = 0;
                    }
                    line.push(c);
                    line_w += w;
                }
            }
        }
        if !line.is_empty() {
            out.push(line);
        }
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

/// Compact count: 999, 1.2k, 3.4M.
pub fn format_count(n: usize) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => format!("{:.1}k", n as f64 / 1_000.0),
        _ => format!("{:.1}M", n as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ellipsis_short() {
        assert_eq!(truncate_ellipsis("hi", 10), "hi");
        assert_eq!(truncate_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_ellipsis_long() {
        assert_eq!(truncate_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_ellipsis("ab", 1), "…");
        assert_eq!(truncate_ellipsis("ab", 0), "");
    }

    #[test]
    fn truncate_counts_columns_not_bytes() {
        assert_eq!(truncate_ellipsis("αβγδε", 5), "αβγδε");
        assert_eq!(truncate_ellipsis("αβγδεζ", 5), "αβγδ…");
    }

    #[test]
    fn wrap_lines_by_width() {
        let lines = wrap_lines("one two three four", 8);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_lines_keeps_paragraph_breaks() {
        let lines = wrap_lines("first\n\nsecond", 20);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn wrap_lines_splits_long_words() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_lines_empty() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("text", 0).is_empty());
    }

    #[test]
    fn format_count_ranges() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2k");
        assert_eq!(format_count(2_500_000), "2.5M");
    }
}
