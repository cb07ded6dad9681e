//! A single task inside a todo list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a todo, unique within its owning list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    #[serde(default)]
    done: bool,
}

impl Todo {
    /// Creates a new, undone todo
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Returns the identifier
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the display title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Marks the todo as done
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done
    pub const fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Flips the done-state and returns the new value
    pub const fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Whether the todo is done
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { "X" } else { " " };
        write!(f, "[{marker}] {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_undone() {
        let todo = Todo::new(TodoId::new(1), "Buy milk");
        assert_eq!(todo.id(), TodoId::new(1));
        assert_eq!(todo.title(), "Buy milk");
        assert!(!todo.is_done());
    }

    #[test]
    fn mark_done_and_undone() {
        let mut todo = Todo::new(TodoId::new(1), "Buy milk");
        todo.mark_done();
        assert!(todo.is_done());
        todo.mark_undone();
        assert!(!todo.is_done());
    }

    #[test]
    fn toggle_returns_new_state() {
        let mut todo = Todo::new(TodoId::new(1), "Buy milk");
        assert!(todo.toggle());
        assert!(!todo.toggle());
    }

    #[test]
    fn display_marks_done_state() {
        let mut todo = Todo::new(TodoId::new(3), "Walk dog");
        assert_eq!(todo.to_string(), "[ ] Walk dog");
        todo.mark_done();
        assert_eq!(todo.to_string(), "[X] Walk dog");
    }

    #[test]
    fn todo_id_parses_digits_only() {
        assert_eq!("42".parse::<TodoId>(), Ok(TodoId::new(42)));
        assert!("abc".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
    }
}
