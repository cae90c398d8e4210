//! Editable question buffer. The cursor is a byte offset that always sits on a
//! char boundary; `\n` is an ordinary character so questions can span lines.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.text.drain(self.cursor..end);
        }
    }

    pub fn left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    /// Start of the current line.
    pub fn home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// End of the current line.
    pub fn end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Deletes from the cursor to the end of the current line.
    pub fn kill_to_end(&mut self) {
        let end = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
        self.text.drain(self.cursor..end);
    }

    /// Empties the buffer and returns what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Cursor position as (line, display column) for placing the terminal cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputBuffer {
        let mut input = InputBuffer::default();
        input.insert_str(s);
        input
    }

    #[test]
    fn insert_ascii() {
        let mut input = InputBuffer::default();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_multibyte() {
        let mut input = InputBuffer::default();
        input.insert('é');
        input.insert('日');
        assert_eq!(input.text(), "é日");
        assert_eq!(input.cursor(), "é日".len());
    }

    #[test]
    fn backspace_removes_whole_char() {
        let mut input = typed("a日");
        input.backspace();
        assert_eq!(input.text(), "a");
        assert_eq!(input.cursor(), 1);
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn cursor_moves_by_char() {
        let mut input = typed("é日x");
        input.left();
        input.left();
        assert_eq!(input.cursor(), "é".len());
        input.delete();
        assert_eq!(input.text(), "éx");
        input.right();
        input.right();
        assert_eq!(input.cursor(), input.text().len());
    }

    #[test]
    fn home_and_end_stay_on_line() {
        let mut input = typed("first\nsecond");
        input.home();
        assert_eq!(input.cursor(), 6);
        input.left();
        input.home();
        assert_eq!(input.cursor(), 0);
        input.end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn kill_to_end_of_line() {
        let mut input = typed("keep this\nand this");
        input.home();
        for _ in 0..6 {
            input.left();
        }
        assert_eq!(input.cursor(), 4);
        input.kill_to_end();
        assert_eq!(input.text(), "keep\nand this");
    }

    #[test]
    fn take_resets() {
        let mut input = typed("question");
        assert_eq!(input.take(), "question");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_position_counts_lines_and_columns() {
        let input = typed("ab\n日本");
        assert_eq!(input.cursor_position(), (1, 4));
    }

    #[test]
    fn blank_detection() {
        assert!(typed("  \n ").is_blank());
        assert!(!typed(" a ").is_blank());
    }
}
