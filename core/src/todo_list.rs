//! An ordered, named collection of todos.

use crate::error::ModelError;
use crate::todo::{Todo, TodoId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a todo list, unique within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    /// Creates a `ListId` from its numeric value
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

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A named list of todos in insertion order.
///
/// Todo ids are handed out by the list itself from a counter that only grows,
/// so an id is never reused after its todo is removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: ListId,
    title: String,
    #[serde(default)]
    todos: Vec<Todo>,
    #[serde(default)]
    last_todo_id: u64,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
            last_todo_id: 0,
        }
    }

    /// Returns the identifier
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title. Uniqueness among sibling lists is the caller's job.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a new undone todo and returns its id
    pub fn add(&mut self, title: impl Into<String>) -> TodoId {
        let highest = self.todos.iter().map(|todo| todo.id().get()).max();
        self.last_todo_id = self.last_todo_id.max(highest.unwrap_or(0)) + 1;
        let id = TodoId::new(self.last_todo_id);
        self.todos.push(Todo::new(id, title));
        id
    }

    /// Number of todos
    #[must_use]
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Number of todos not yet done
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.is_done()).count()
    }

    /// True iff the list has todos and every one of them is done.
    ///
    /// An empty list is not done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    /// Todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// First todo, if any
    #[must_use]
    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    /// Last todo, if any
    #[must_use]
    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Todo at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] when `index` is past the end.
    pub fn item_at(&self, index: usize) -> Result<&Todo, ModelError> {
        self.todos.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: self.todos.len(),
        })
    }

    fn item_at_mut(&mut self, index: usize) -> Result<&mut Todo, ModelError> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Marks the todo at `index` done
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] when `index` is past the end.
    pub fn mark_done_at(&mut self, index: usize) -> Result<(), ModelError> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    /// Marks the todo at `index` not done
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] when `index` is past the end.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<(), ModelError> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    /// Marks every todo done
    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    /// Marks every todo not done
    pub fn mark_all_undone(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_undone);
    }

    /// Position of the todo with `id`
    #[must_use]
    pub fn find_index_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    /// Todo with `id`
    #[must_use]
    pub fn find_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Mutable todo with `id`
    pub fn find_by_id_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }

    /// First todo whose title matches exactly
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    /// Todos that are done
    pub fn all_done(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|todo| todo.is_done())
    }

    /// Todos that are not done
    pub fn all_not_done(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|todo| !todo.is_done())
    }

    /// Removes and returns the todo at `index`
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] when `index` is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, ModelError> {
        if index >= self.todos.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Removes and returns the todo with `id`
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::TodoNotFound`] when no todo has that id.
    pub fn remove(&mut self, id: TodoId) -> Result<Todo, ModelError> {
        let index = self
            .find_index_of(id)
            .ok_or(ModelError::TodoNotFound(id))?;
        self.remove_at(index)
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn groceries() -> TodoList {
        let mut list = TodoList::new(ListId::new(1), "Groceries");
        list.add("Milk");
        list.add("Eggs");
        list.add("Bread");
        list
    }

    #[test]
    fn add_appends_with_sequential_ids() {
        let list = groceries();
        let titles: Vec<_> = list.todos().iter().map(Todo::title).collect();
        assert_eq!(titles, ["Milk", "Eggs", "Bread"]);
        let ids: Vec<_> = list.todos().iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut list = groceries();
        list.remove(TodoId::new(3)).unwrap();
        let id = list.add("Butter");
        assert_eq!(id, TodoId::new(4));
    }

    #[test]
    fn empty_list_is_not_done() {
        let list = TodoList::new(ListId::new(1), "Empty");
        assert!(!list.is_done());
    }

    #[test]
    fn is_done_requires_every_todo_done() {
        let mut list = groceries();
        assert!(!list.is_done());
        list.mark_done_at(0).unwrap();
        list.mark_done_at(1).unwrap();
        assert!(!list.is_done());
        list.mark_done_at(2).unwrap();
        assert!(list.is_done());
    }

    #[test]
    fn mark_all_done_sets_every_todo() {
        let mut list = TodoList::new(ListId::new(1), "Chores");
        list.add("A");
        list.add("B");
        list.mark_done_at(1).unwrap();

        list.mark_all_done();

        assert!(list.todos().iter().all(Todo::is_done));
        assert!(list.is_done());
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn mark_all_undone_clears_every_todo() {
        let mut list = groceries();
        list.mark_all_done();
        list.mark_all_undone();
        assert_eq!(list.remaining(), 3);
        assert_eq!(list.all_done().count(), 0);
        assert_eq!(list.all_not_done().count(), 3);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut list = groceries();
        assert_eq!(
            list.remove_at(3),
            Err(ModelError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn remove_by_id_reports_missing() {
        let mut list = groceries();
        let removed = list.remove(TodoId::new(2)).unwrap();
        assert_eq!(removed.title(), "Eggs");
        assert_eq!(
            list.remove(TodoId::new(2)),
            Err(ModelError::TodoNotFound(TodoId::new(2)))
        );
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn lookups() {
        let list = groceries();
        assert_eq!(list.find_index_of(TodoId::new(2)), Some(1));
        assert_eq!(list.find_index_of(TodoId::new(9)), None);
        assert_eq!(list.find_by_title("Bread").map(Todo::id), Some(TodoId::new(3)));
        assert!(list.find_by_title("bread").is_none());
        assert_eq!(list.first().map(Todo::title), Some("Milk"));
        assert_eq!(list.last().map(Todo::title), Some("Bread"));
        assert_eq!(list.item_at(1).map(Todo::title), Ok("Eggs"));
        assert!(list.item_at(7).is_err());
    }

    #[test]
    fn display_lists_todos_under_header() {
        let mut list = groceries();
        list.mark_done_at(1).unwrap();
        assert_eq!(
            list.to_string(),
            "---- Groceries ----\n[ ] Milk\n[X] Eggs\n[ ] Bread"
        );
    }
}
