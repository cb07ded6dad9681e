//! The per-session collection of todo lists.

use crate::sort;
use crate::todo::{Todo, TodoId};
use crate::todo_list::{ListId, TodoList};
use serde::{Deserialize, Serialize};

/// Every todo list owned by one session.
///
/// This is the whole persisted state of a browser session: it is read from
/// the session store at the start of a request and written back whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoLists {
    #[serde(default)]
    lists: Vec<TodoList>,
    #[serde(default)]
    last_list_id: u64,
}

impl TodoLists {
    /// Creates an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: Vec::new(),
            last_list_id: 0,
        }
    }

    /// Appends a new empty list and returns its id.
    ///
    /// No title checks happen here; see [`crate::validation`].
    pub fn create(&mut self, title: impl Into<String>) -> ListId {
        let highest = self.lists.iter().map(|list| list.id().get()).max();
        self.last_list_id = self.last_list_id.max(highest.unwrap_or(0)) + 1;
        let id = ListId::new(self.last_list_id);
        self.lists.push(TodoList::new(id, title));
        id
    }

    /// Number of lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether there are no lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Lists in creation order
    #[must_use]
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Lists in display order
    #[must_use]
    pub fn sorted(&self) -> Vec<&TodoList> {
        sort::sort_todo_lists(&self.lists)
    }

    /// List with `id`
    #[must_use]
    pub fn get(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id() == id)
    }

    /// Mutable list with `id`
    pub fn get_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id() == id)
    }

    /// Todo `todo_id` inside list `list_id`
    #[must_use]
    pub fn todo(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.get(list_id)?.find_by_id(todo_id)
    }

    /// Whether any list has exactly this title
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.lists.iter().any(|list| list.title() == title)
    }

    /// Removes and returns the list with `id`, keeping the others in order
    pub fn remove(&mut self, id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|list| list.id() == id)?;
        Some(self.lists.remove(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_across_removals() {
        let mut lists = TodoLists::new();
        let first = lists.create("Work");
        let second = lists.create("Home");
        assert_eq!((first.get(), second.get()), (1, 2));

        lists.remove(second).unwrap();
        assert_eq!(lists.create("Garden").get(), 3);
    }

    #[test]
    fn remove_leaves_other_lists_untouched() {
        let mut lists = TodoLists::new();
        let a = lists.create("A");
        let b = lists.create("B");
        let c = lists.create("C");

        let removed = lists.remove(b).unwrap();

        assert_eq!(removed.title(), "B");
        let remaining: Vec<_> = lists.lists().iter().map(TodoList::id).collect();
        assert_eq!(remaining, [a, c]);
        assert!(lists.remove(b).is_none());
    }

    #[test]
    fn lookup_by_ids() {
        let mut lists = TodoLists::new();
        let id = lists.create("Work");
        let todo_id = lists.get_mut(id).unwrap().add("Email");

        assert_eq!(lists.get(id).map(TodoList::title), Some("Work"));
        assert_eq!(lists.todo(id, todo_id).map(Todo::title), Some("Email"));
        assert!(lists.get(ListId::new(99)).is_none());
        assert!(lists.todo(id, TodoId::new(99)).is_none());
    }

    #[test]
    fn contains_title_is_exact() {
        let mut lists = TodoLists::new();
        lists.create("Work");
        assert!(lists.contains_title("Work"));
        assert!(!lists.contains_title("work"));
        assert!(!lists.contains_title("Work "));
    }

    #[test]
    fn rehydrates_from_stored_json() {
        let mut lists = TodoLists::new();
        let id = lists.create("Work");
        let list = lists.get_mut(id).unwrap();
        list.add("Email");
        list.mark_all_done();

        let stored = serde_json::to_value(&lists).unwrap();
        let restored: TodoLists = serde_json::from_value(stored).unwrap();

        assert_eq!(restored, lists);
        assert!(restored.get(id).unwrap().is_done());
    }

    #[test]
    fn rehydrates_partial_data_with_defaults() {
        let restored: TodoLists = serde_json::from_str(
            r#"{"lists":[{"id":4,"title":"Work","todos":[{"id":1,"title":"Email"}]}]}"#,
        )
        .unwrap();

        let list = restored.get(ListId::new(4)).unwrap();
        assert_eq!(list.size(), 1);
        assert!(!list.todos()[0].is_done());
    }

    #[test]
    fn ids_stay_unique_after_rehydrating_without_counter() {
        let mut restored: TodoLists =
            serde_json::from_str(r#"{"lists":[{"id":4,"title":"Work"}]}"#).unwrap();
        assert_eq!(restored.create("Home").get(), 5);
    }
}
