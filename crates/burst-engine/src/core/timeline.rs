/// Delayed actions keyed on host milliseconds.
///
/// Stands in for the page's `setTimeout` calls: items are scheduled at an
/// absolute time and handed back by [`poll`](Timeline::poll) once due,
/// ordered by due time and then by scheduling order.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    due_ms: f64,
    seq: u64,
    item: T,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `item` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: f64, item: T) {
        self.entries.push(Entry {
            due_ms,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Remove and return every item due at or before `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.due_ms <= now_ms);
        self.entries = pending;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.item).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_early() {
        let mut t = Timeline::new();
        t.schedule(500.0, "a");
        assert!(t.poll(499.9).is_empty());
        assert!(!t.is_empty());
        assert_eq!(t.poll(500.0), vec!["a"]);
    }

    #[test]
    fn fires_in_due_then_schedule_order() {
        let mut t = Timeline::new();
        t.schedule(2500.0, "late");
        t.schedule(500.0, "first");
        t.schedule(500.0, "second");
        t.schedule(100.0, "earliest");
        assert_eq!(t.poll(600.0), vec!["earliest", "first", "second"]);
        assert_eq!(t.poll(3000.0), vec!["late"]);
        assert!(t.is_empty());
    }
}
