pub const CURSOR_BORDER: &str = "2px solid #6366f1";

/// Reveals a heading one character at a time.
pub struct Typewriter {
    text: String,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
        }
    }

    /// Shows one more character and returns the visible prefix, or `None`
    /// once the whole text is out.
    pub fn tick(&mut self) -> Option<&str> {
        let (offset, ch) = self.text[self.revealed..].char_indices().next()?;
        self.revealed += offset + ch.len_utf8();
        Some(&self.text[..self.revealed])
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(text: &str) -> Vec<String> {
        let mut writer = Typewriter::new(text);
        std::iter::from_fn(|| writer.tick().map(str::to_string)).collect()
    }

    #[test]
    fn hello_reveals_one_character_per_tick() {
        assert_eq!(frames("Hello"), vec!["H", "He", "Hel", "Hell", "Hello"]);
    }

    #[test]
    fn multibyte_text_advances_by_character() {
        assert_eq!(frames("né✓"), vec!["n", "né", "né✓"]);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.tick(), None);
    }

    #[test]
    fn finished_writer_stays_finished() {
        let mut writer = Typewriter::new("ab");
        writer.tick();
        assert!(!writer.is_done());
        writer.tick();
        assert!(writer.is_done());
        assert_eq!(writer.tick(), None);
    }
}
