//! Caption text attached to an exported drawing.

/// Default caption length limit, in characters.
pub const DEFAULT_CAPTION_MAX_LEN: usize = 100;

/// A length-bounded caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    text: String,
    max_len: usize,
}

impl Default for Caption {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_MAX_LEN)
    }
}

impl Caption {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    /// Replace the caption, keeping at most `max_len` characters.
    /// Returns true if the input was truncated.
    pub fn set(&mut self, text: &str) -> bool {
        self.text = text.chars().take(self.max_len).collect();
        text.chars().count() > self.max_len
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Caption as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Caption with surrounding whitespace removed, as sent with an export.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_truncates_by_chars() {
        let mut caption = Caption::new(3);
        assert!(caption.set("äöüß"));
        assert_eq!(caption.as_str(), "äöü");
        assert!(!caption.set("ab"));
        assert_eq!(caption.as_str(), "ab");
    }

    #[test]
    fn test_caption_default_limit() {
        let mut caption = Caption::default();
        let long = "x".repeat(150);
        assert!(caption.set(&long));
        assert_eq!(caption.as_str().len(), 100);
    }

    #[test]
    fn test_trimmed_and_clear() {
        let mut caption = Caption::default();
        caption.set("  area of a circle  ");
        assert_eq!(caption.trimmed(), "area of a circle");
        caption.clear();
        assert!(caption.is_empty());
        assert_eq!(caption.trimmed(), "");
    }
}
