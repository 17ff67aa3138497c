//! Bounded action log with a redo stack.

use crate::actions::DrawAction;
use std::collections::VecDeque;

/// Maximum number of committed actions to keep.
pub const MAX_HISTORY: usize = 50;

/// The committed drawing (oldest first) plus the actions popped off it by undo.
#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    /// Committed actions, in paint order.
    log: VecDeque<DrawAction>,
    /// Undone actions, most recent last.
    redo_stack: Vec<DrawAction>,
}

impl ActionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new action. Evicts the oldest entry past [`MAX_HISTORY`] and
    /// drops every undone action.
    pub fn append(&mut self, action: DrawAction) {
        self.push_bounded(action);
        self.redo_stack.clear();
    }

    /// Move the newest action onto the redo stack.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(action) = self.log.pop_back() {
            self.redo_stack.push(action);
            true
        } else {
            false
        }
    }

    /// Restore the most recently undone action.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(action) = self.redo_stack.pop() {
            self.push_bounded(action);
            true
        } else {
            false
        }
    }

    /// Empty both the log and the redo stack.
    pub fn clear(&mut self) {
        self.log.clear();
        self.redo_stack.clear();
    }

    fn push_bounded(&mut self, action: DrawAction) {
        self.log.push_back(action);
        while self.log.len() > MAX_HISTORY {
            self.log.pop_front();
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Committed actions in paint order (back to front).
    pub fn actions(&self) -> impl Iterator<Item = &DrawAction> {
        self.log.iter()
    }

    pub fn last(&self) -> Option<&DrawAction> {
        self.log.back()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionStyle, Circle, Composite, Line, Stroke};
    use kurbo::Point;

    fn line(i: usize) -> DrawAction {
        let x = i as f64;
        DrawAction::Line(Line::new(Point::new(x, 0.0), Point::new(x, 10.0), ActionStyle::default()))
    }

    #[test]
    fn test_append_and_len() {
        let mut history = ActionHistory::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());

        history.append(line(0));
        assert_eq!(history.len(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_bounded_history_keeps_most_recent() {
        let mut history = ActionHistory::new();
        for i in 0..120 {
            history.append(line(i));
            assert!(history.len() <= MAX_HISTORY);
        }
        assert_eq!(history.len(), MAX_HISTORY);

        let kept: Vec<_> = history.actions().cloned().collect();
        let expected: Vec<_> = (70..120).map(line).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_fifty_first_append_evicts_oldest() {
        let mut history = ActionHistory::new();
        for i in 0..51 {
            history.append(line(i));
        }
        assert_eq!(history.len(), 50);
        assert!(!history.actions().any(|a| *a == line(0)));
        assert_eq!(history.actions().next(), Some(&line(1)));
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut history = ActionHistory::new();
        for i in 0..5 {
            history.append(line(i));
        }
        let before: Vec<_> = history.actions().cloned().collect();

        assert!(history.undo());
        assert_eq!(history.len(), 4);
        assert_eq!(history.redo_len(), 1);

        assert!(history.redo());
        let after: Vec<_> = history.actions().cloned().collect();
        assert_eq!(before, after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_append_clears_redo() {
        let mut history = ActionHistory::new();
        history.append(line(0));
        history.append(line(1));
        history.undo();
        assert!(history.can_redo());

        history.append(DrawAction::Circle(Circle::new(Point::ZERO, 3.0, ActionStyle::default())));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_redo_empty_stacks() {
        let mut history = ActionHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = ActionHistory::new();
        let stroke = Stroke::from_points(
            vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            ActionStyle::default(),
            Composite::Paint,
        )
        .unwrap();
        history.append(DrawAction::Stroke(stroke));
        history.append(line(1));
        history.undo();

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_all_then_redo_all() {
        let mut history = ActionHistory::new();
        for i in 0..MAX_HISTORY {
            history.append(line(i));
        }
        while history.undo() {}
        assert_eq!(history.redo_len(), MAX_HISTORY);
        while history.redo() {}
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.last(), Some(&line(MAX_HISTORY - 1)));
    }
}
