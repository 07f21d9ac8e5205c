//! Character window for neighbour lookups
//!
//! Filter rules look one scalar value to each side of the current
//! character. The window keeps those three slots while the text is walked
//! once, so no byte offsets or re-scans are needed for non-ASCII input.

/// Sliding window of characters: [prev, current, next]
#[derive(Debug, Clone, Default)]
pub struct CharacterWindow {
    chars: [Option<char>; 3],
}

impl CharacterWindow {
    /// Create an empty window positioned before the first character
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the window by one character
    ///
    /// `next_char` is the lookahead at position + 1, `None` at end of text.
    pub fn advance(&mut self, current_char: char, next_char: Option<char>) {
        self.chars[0] = self.chars[1];
        self.chars[1] = Some(current_char);
        self.chars[2] = next_char;
    }

    /// Previous character (position - 1)
    pub fn prev_char(&self) -> Option<char> {
        self.chars[0]
    }

    /// Current character
    pub fn current_char(&self) -> Option<char> {
        self.chars[1]
    }

    /// Next character (position + 1)
    pub fn next_char(&self) -> Option<char> {
        self.chars[2]
    }

    /// (prev, current, next) for pattern matching
    pub fn context_triple(&self) -> (Option<char>, Option<char>, Option<char>) {
        (self.prev_char(), self.current_char(), self.next_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(text: &str) -> Vec<CharacterWindow> {
        let mut chars = text.chars().peekable();
        let mut window = CharacterWindow::new();
        let mut out = Vec::new();
        while let Some(ch) = chars.next() {
            window.advance(ch, chars.peek().copied());
            out.push(window.clone());
        }
        out
    }

    #[test]
    fn test_window_advance() {
        let ws = windows("abc");
        assert_eq!(ws[0].context_triple(), (None, Some('a'), Some('b')));
        assert_eq!(ws[1].context_triple(), (Some('a'), Some('b'), Some('c')));
        assert_eq!(ws[2].context_triple(), (Some('b'), Some('c'), None));
    }

    #[test]
    fn test_neighbours_are_scalars_not_bytes() {
        let ws = windows("日本語.");
        assert_eq!(ws.len(), 4);
        assert_eq!(ws[3].prev_char(), Some('語'));
        assert_eq!(ws[2].next_char(), Some('.'));
    }

    #[test]
    fn test_single_character() {
        let ws = windows("x");
        assert_eq!(ws.len(), 1);
        assert_eq!(ws[0].context_triple(), (None, Some('x'), None));
    }
}
