/// Progressive hint messages. The index only moves forward and stops at the last one.
#[derive(Debug, Clone)]
pub struct HintState {
    messages: Vec<String>,
    index: usize,
}

impl HintState {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages, index: 0 }
    }

    /// Move to the next hint, saturating at the last. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1).min(self.messages.len().saturating_sub(1));
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        self.messages.get(self.index).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_saturates() {
        let mut h = HintState::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(h.current(), "a");
        assert_eq!(h.advance(), 1);
        assert_eq!(h.advance(), 2);
        assert_eq!(h.advance(), 2);
        assert_eq!(h.current(), "c");
    }

    #[test]
    fn empty_hints_are_harmless() {
        let mut h = HintState::new(Vec::new());
        assert_eq!(h.advance(), 0);
        assert_eq!(h.current(), "");
    }
}
