//! Display ordering for lists and todos.
//!
//! Incomplete entries come before complete ones; within each group entries are
//! ordered by title, ignoring case. The sort is stable, so entries whose titles
//! differ only in case keep their insertion order.

use crate::todo::Todo;
use crate::todo_list::TodoList;

/// Anything that can be put in display order.
pub trait DisplayOrder {
    /// Whether the entry belongs to the completed group
    fn is_complete(&self) -> bool;

    /// Title used for alphabetical ordering
    fn sort_title(&self) -> &str;
}

impl DisplayOrder for Todo {
    fn is_complete(&self) -> bool {
        self.is_done()
    }

    fn sort_title(&self) -> &str {
        self.title()
    }
}

impl DisplayOrder for TodoList {
    fn is_complete(&self) -> bool {
        self.is_done()
    }

    fn sort_title(&self) -> &str {
        self.title()
    }
}

/// Returns references to `items` in display order without touching the input.
pub fn display_order<T: DisplayOrder>(items: &[T]) -> Vec<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by_cached_key(|item| (item.is_complete(), item.sort_title().to_lowercase()));
    ordered
}

/// Lists ordered incomplete first, then by title
#[must_use]
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    display_order(lists)
}

/// The list's todos ordered undone first, then by title
#[must_use]
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    display_order(list.todos())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lists::TodoLists;
    use proptest::prelude::*;

    fn titles<T: DisplayOrder>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.sort_title().to_string()).collect()
    }

    #[test]
    fn incomplete_lists_come_first() {
        let mut lists = TodoLists::new();
        let apple = lists.create("apple");
        lists.create("Banana");
        let list = lists.get_mut(apple).unwrap();
        list.add("core");
        list.mark_all_done();

        let sorted = sort_todo_lists(lists.lists());

        assert_eq!(titles(&sorted), ["Banana", "apple"]);
    }

    #[test]
    fn empty_lists_sort_with_incomplete() {
        let mut lists = TodoLists::new();
        let done = lists.create("Alpha");
        let list = lists.get_mut(done).unwrap();
        list.add("x");
        list.mark_all_done();
        lists.create("Zulu");

        let sorted = sort_todo_lists(lists.lists());

        assert_eq!(titles(&sorted), ["Zulu", "Alpha"]);
    }

    #[test]
    fn titles_compare_case_insensitively() {
        let mut lists = TodoLists::new();
        lists.create("cherry");
        lists.create("Banana");
        lists.create("apple");

        let sorted = sort_todo_lists(lists.lists());

        assert_eq!(titles(&sorted), ["apple", "Banana", "cherry"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut lists = TodoLists::new();
        let id = lists.create("Groceries");
        let list = lists.get_mut(id).unwrap();
        list.add("milk");
        list.add("Milk");
        list.add("MILK");

        let sorted = sort_todos(lists.get(id).unwrap());

        assert_eq!(titles(&sorted), ["milk", "Milk", "MILK"]);
    }

    #[test]
    fn todos_undone_first_then_title() {
        let mut lists = TodoLists::new();
        let id = lists.create("Chores");
        let list = lists.get_mut(id).unwrap();
        list.add("dishes");
        list.add("Laundry");
        list.add("bins");
        list.mark_done_at(2).unwrap();

        let before: Vec<_> = list.todos().to_vec();
        let sorted = sort_todos(list);

        assert_eq!(titles(&sorted), ["dishes", "Laundry", "bins"]);
        assert_eq!(list.todos(), before.as_slice());
    }

    proptest! {
        #[test]
        fn sorted_todos_are_a_permutation_in_display_order(
            entries in proptest::collection::vec(("[a-zA-Z]{0,8}", any::<bool>()), 0..20)
        ) {
            let mut lists = TodoLists::new();
            let id = lists.create("Prop");
            let list = lists.get_mut(id).unwrap();
            for (index, (title, done)) in entries.iter().enumerate() {
                list.add(title.clone());
                if *done {
                    list.mark_done_at(index).unwrap();
                }
            }

            let sorted = sort_todos(list);

            prop_assert_eq!(sorted.len(), list.size());
            for pair in sorted.windows(2) {
                let key = |todo: &Todo| (todo.is_done(), todo.title().to_lowercase());
                prop_assert!(key(pair[0]) <= key(pair[1]));
            }
        }
    }
}
