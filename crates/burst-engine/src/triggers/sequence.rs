//! Keyboard trigger buffers: a sliding window of key codes and a rolling
//! buffer of typed characters.

use std::collections::VecDeque;

/// Matches the most recent key codes against a fixed sequence.
#[derive(Debug, Clone)]
pub struct KeyWindow {
    target: Vec<String>,
    recent: VecDeque<String>,
}

impl KeyWindow {
    pub fn new(target: Vec<String>) -> Self {
        let cap = target.len();
        Self {
            target,
            recent: VecDeque::with_capacity(cap + 1),
        }
    }

    /// Push a key code. Returns true when the window now equals the target.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_string());
        if self.recent.len() > self.target.len() {
            self.recent.pop_front();
        }
        !self.target.is_empty()
            && self.recent.len() == self.target.len()
            && self.recent.iter().zip(&self.target).all(|(a, b)| a == b)
    }
}

/// Keeps the last `capacity` typed characters (lowercased).
#[derive(Debug, Clone)]
pub struct TypedBuffer {
    capacity: usize,
    chars: VecDeque<char>,
}

impl TypedBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            chars: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a `KeyboardEvent.key` value. Only single-character keys count;
    /// names like `"Shift"` or `"ArrowUp"` are ignored. Returns whether it was appended.
    pub fn push_key(&mut self, key: &str) -> bool {
        let mut it = key.chars();
        let (Some(c), None) = (it.next(), it.next()) else {
            return false;
        };
        for lower in c.to_lowercase() {
            self.chars.push_back(lower);
        }
        while self.chars.len() > self.capacity {
            self.chars.pop_front();
        }
        true
    }

    fn contents(&self) -> String {
        self.chars.iter().collect()
    }

    /// First of `words` found anywhere in the buffer.
    pub fn find_any<'a>(&self, words: &'a [String]) -> Option<&'a str> {
        let text = self.contents();
        words
            .iter()
            .find(|w| !w.is_empty() && text.contains(w.as_str()))
            .map(|w| w.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn window_matches_exact_sequence() {
        let mut w = KeyWindow::new(codes(&["ArrowUp", "ArrowDown", "KeyB"]));
        assert!(!w.push("ArrowUp"));
        assert!(!w.push("ArrowDown"));
        assert!(w.push("KeyB"));
    }

    #[test]
    fn window_slides_past_noise() {
        let mut w = KeyWindow::new(codes(&["KeyA", "KeyB"]));
        for code in ["KeyX", "KeyA", "KeyA", "KeyQ", "KeyA"] {
            assert!(!w.push(code));
        }
        assert!(w.push("KeyB"));
        assert!(!w.push("KeyB"));
    }

    #[test]
    fn typed_buffer_keeps_last_chars() {
        let mut b = TypedBuffer::new(10);
        for c in "abcdefghijklmno".chars() {
            b.push_key(&c.to_string());
        }
        assert_eq!(b.contents(), "fghijklmno");
    }

    #[test]
    fn typed_buffer_ignores_named_keys_and_lowercases() {
        let mut b = TypedBuffer::new(10);
        assert!(!b.push_key("Shift"));
        assert!(!b.push_key(""));
        assert!(b.push_key("H"));
        assert!(b.push_key("i"));
        assert_eq!(b.contents(), "hi");
    }

    #[test]
    fn typed_buffer_finds_words() {
        let words = codes(&["email", "contact", "hello"]);
        let mut b = TypedBuffer::new(10);
        for c in "sayhello".chars() {
            b.push_key(&c.to_string());
        }
        assert_eq!(b.find_any(&words), Some("hello"));
    }

    #[test]
    fn word_longer_than_buffer_never_matches() {
        let words = codes(&["contact"]);
        let mut b = TypedBuffer::new(4);
        for c in "contact".chars() {
            b.push_key(&c.to_string());
        }
        assert_eq!(b.find_any(&words), None);
    }
}
