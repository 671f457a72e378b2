//! In-memory history stack.

use crate::history::History;
use crate::routing::matcher::normalize_base;

/// A history stack with a cursor, kept entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    base: String,
    stack: Vec<String>,
    /// Index of the current entry; meaningless while `stack` is empty.
    cursor: usize,
}

impl MemoryHistory {
    /// Create an empty history mounted under `base`.
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            stack: Vec::new(),
            cursor: 0,
        }
    }

    /// Current cursor position, if any entry exists.
    pub fn position(&self) -> Option<usize> {
        (!self.stack.is_empty()).then_some(self.cursor)
    }

    fn offset(&self, delta: isize) -> Option<usize> {
        if self.stack.is_empty() {
            return None;
        }
        let target = self.cursor.checked_add_signed(delta)?;
        (target < self.stack.len()).then_some(target)
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> Option<&str> {
        self.stack.get(self.cursor).map(String::as_str)
    }

    fn peek(&self, delta: isize) -> Option<&str> {
        self.offset(delta).map(|i| self.stack[i].as_str())
    }

    fn push(&mut self, location: String) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.cursor + 1);
        }
        self.stack.push(location);
        self.cursor = self.stack.len() - 1;
    }

    fn replace(&mut self, location: String) {
        match self.stack.get_mut(self.cursor) {
            Some(current) => *current = location,
            None => self.push(location),
        }
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.offset(delta) {
            Some(target) => {
                self.cursor = target;
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn entries(&self) -> Vec<String> {
        self.stack.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let mut history = MemoryHistory::new("/");
        assert!(history.is_empty());
        assert_eq!(history.location(), None);
        assert_eq!(history.position(), None);
        assert!(!history.go(-1));
        assert!(!history.go(0));
        assert_eq!(history.url(), None);
    }

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new("/");
        history.push("/".into());
        history.push("/home".into());
        history.push("/register".into());

        assert_eq!(history.location(), Some("/register"));
        assert_eq!(history.peek(-2), Some("/"));
        assert_eq!(history.peek(1), None);

        assert!(history.go(-1));
        assert_eq!(history.location(), Some("/home"));
        assert!(history.go(1));
        assert_eq!(history.location(), Some("/register"));
        assert!(!history.go(1));
        assert!(!history.go(-3));
        assert_eq!(history.location(), Some("/register"));
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push("/".into());
        history.push("/home".into());
        history.go(-1);
        history.push("/register".into());

        assert_eq!(history.entries(), vec!["/".to_string(), "/register".to_string()]);
        assert_eq!(history.position(), Some(1));
    }

    #[test]
    fn test_replace() {
        let mut history = MemoryHistory::new("/");
        history.replace("/".into());
        assert_eq!(history.len(), 1);

        history.push("/home".into());
        history.replace("/register".into());
        assert_eq!(history.entries(), vec!["/".to_string(), "/register".to_string()]);
    }

    #[test]
    fn test_base_is_applied_to_url() {
        let mut history = MemoryHistory::new("/app/");
        assert_eq!(history.base(), "/app");
        history.push("/home".into());
        assert_eq!(history.url().as_deref(), Some("/app/home"));
    }
}
