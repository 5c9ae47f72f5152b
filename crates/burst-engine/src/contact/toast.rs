/// A transient confirmation message with a fixed display window.
#[derive(Debug, Clone)]
pub struct Toast {
    duration_ms: f64,
    message: String,
    visible_until: Option<f64>,
}

impl Toast {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            message: String::new(),
            visible_until: None,
        }
    }

    /// Show `message` from `now_ms`. Showing again restarts the window.
    /// Returns the time at which it should disappear.
    pub fn show(&mut self, message: &str, now_ms: f64) -> f64 {
        self.message.clear();
        self.message.push_str(message);
        let until = now_ms + self.duration_ms;
        self.visible_until = Some(until);
        until
    }

    pub fn is_visible(&self, now_ms: f64) -> bool {
        self.visible_until.is_some_and(|until| now_ms < until)
    }

    /// Last message shown (kept after it expires).
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_shown() {
        let toast = Toast::new(3000.0);
        assert!(!toast.is_visible(0.0));
        assert_eq!(toast.message(), "");
    }

    #[test]
    fn visible_for_duration() {
        let mut toast = Toast::new(3000.0);
        assert_eq!(toast.show("Copied!", 1000.0), 4000.0);
        assert!(toast.is_visible(1000.0));
        assert!(toast.is_visible(3999.0));
        assert!(!toast.is_visible(4000.0));
        assert_eq!(toast.message(), "Copied!");
    }

    #[test]
    fn showing_again_restarts_window() {
        let mut toast = Toast::new(3000.0);
        toast.show("one", 0.0);
        toast.show("two", 2000.0);
        assert!(toast.is_visible(4500.0));
        assert_eq!(toast.message(), "two");
    }
}
