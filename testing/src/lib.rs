//! # Todolists Testing
//!
//! Testing utilities and helpers for the todolists crates.
//!
//! This crate provides:
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - Builders for session state fixtures
//! - proptest strategies for titles and todo lists
//!
//! ## Example
//!
//! ```
//! use todolists_testing::ListsFixture;
//!
//! let state = ListsFixture::new()
//!     .list("Groceries", &[("Milk", false), ("Eggs", true)])
//!     .list("Work", &[])
//!     .build();
//!
//! assert_eq!(state.len(), 2);
//! ```


use todolists_core::{ListId, TodoId, TodoLists};

/// Test helpers and utilities
pub mod helpers {
    use super::{ListId, TodoId, TodoLists};

    /// Builder for a populated [`TodoLists`].
    ///
    /// Lists get ids `1, 2, ...` in the order they are declared; todos inside
    /// each list likewise start at `1`.
    #[derive(Debug, Default)]
    pub struct ListsFixture {
        state: TodoLists,
    }

    impl ListsFixture {
        /// Start from an empty session
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a list with `(title, done)` todos
        #[must_use]
        pub fn list(mut self, title: &str, todos: &[(&str, bool)]) -> Self {
            let list_id = self.state.create(title);
            if let Some(list) = self.state.get_mut(list_id) {
                for (title, done) in todos {
                    let todo_id = list.add(*title);
                    if *done {
                        if let Some(todo) = list.find_by_id_mut(todo_id) {
                            todo.mark_done();
                        }
                    }
                }
            }
            self
        }

        /// Finish building
        #[must_use]
        pub fn build(self) -> TodoLists {
            self.state
        }
    }

    /// Shorthand for `ListId::new`
    #[must_use]
    pub const fn list_id(id: u64) -> ListId {
        ListId::new(id)
    }

    /// Shorthand for `TodoId::new`
    #[must_use]
    pub const fn todo_id(id: u64) -> TodoId {
        TodoId::new(id)
    }

    /// Titles of the session's lists in creation order
    #[must_use]
    pub fn list_titles(state: &TodoLists) -> Vec<String> {
        state
            .lists()
            .iter()
            .map(|list| list.title().to_string())
            .collect()
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Titles that pass validation: 1 to 100 characters with no surrounding
    /// whitespace.
    pub fn valid_title() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Za-z0-9]",
            "[A-Za-z0-9][A-Za-z0-9 ]{0,98}[A-Za-z0-9]",
        ]
    }

    /// Sequences of `(title, done)` todos
    pub fn todo_entries() -> impl Strategy<Value = Vec<(String, bool)>> {
        proptest::collection::vec(("[a-zA-Z ]{1,12}", any::<bool>()), 0..16)
    }
}

// Re-export commonly used items
pub use helpers::{list_id, list_titles, todo_id, ListsFixture};
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixture_assigns_sequential_ids() {
        let state = ListsFixture::new()
            .list("Groceries", &[("Milk", false), ("Eggs", true)])
            .list("Work", &[])
            .build();

        assert_eq!(list_titles(&state), ["Groceries", "Work"]);
        let groceries = state.get(list_id(1));
        assert!(groceries.is_some_and(|list| list.size() == 2 && list.remaining() == 1));
        assert!(state.todo(list_id(1), todo_id(2)).is_some_and(|todo| todo.is_done()));
        assert!(state.get(list_id(2)).is_some_and(|list| list.size() == 0));
    }

    proptest! {
        #[test]
        fn test_valid_titles_are_within_bounds(title in properties::valid_title()) {
            let length = title.chars().count();
            prop_assert!((1..=todolists_core::MAX_TITLE_LENGTH).contains(&length));
            prop_assert_eq!(title.trim(), title.as_str());
        }
    }
}
