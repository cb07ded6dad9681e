//! Title validation.
//!
//! Each form runs a small, ordered set of rules over the trimmed input. Every
//! failed rule contributes one [`ValidationFailure`]; the "required" rule stops
//! evaluation early since nothing after it is meaningful for empty input.

use crate::lists::TodoLists;
use serde::{Deserialize, Serialize};

/// Longest accepted title, counted in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Form field carrying a list title
pub const LIST_TITLE_FIELD: &str = "todo_list_title";

/// Form field carrying a todo title
pub const TODO_TITLE_FIELD: &str = "todo_title";

/// A single failed validation rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Form field the rule applies to
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationFailure {
    /// Creates a failure for `field`
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One check applied to a trimmed title.
enum Rule<'a> {
    Required(&'static str),
    MaxLength(&'static str),
    UniqueAmong(&'a TodoLists, &'static str),
}

impl Rule<'_> {
    /// Returns the failure message when `title` breaks the rule
    fn check(&self, title: &str) -> Option<&'static str> {
        match self {
            Self::Required(message) => title.is_empty().then_some(*message),
            Self::MaxLength(message) => {
                (title.chars().count() > MAX_TITLE_LENGTH).then_some(*message)
            }
            Self::UniqueAmong(lists, message) => lists.contains_title(title).then_some(*message),
        }
    }

    const fn bails(&self) -> bool {
        matches!(self, Self::Required(_))
    }
}

fn run(field: &str, raw: &str, rules: &[Rule<'_>]) -> Result<String, Vec<ValidationFailure>> {
    let title = raw.trim();
    let mut failures = Vec::new();

    for rule in rules {
        if let Some(message) = rule.check(title) {
            failures.push(ValidationFailure::new(field, message));
            if rule.bails() {
                break;
            }
        }
    }

    if failures.is_empty() {
        Ok(title.to_string())
    } else {
        Err(failures)
    }
}

/// Validates the title of a list about to be created.
///
/// # Errors
///
/// Returns every failed rule when the title is empty, too long, or already
/// used by another list.
pub fn new_list_title(raw: &str, lists: &TodoLists) -> Result<String, Vec<ValidationFailure>> {
    run(
        LIST_TITLE_FIELD,
        raw,
        &[
            Rule::Required("The list title is required"),
            Rule::MaxLength("List title must be between 1 and 100 characters"),
            Rule::UniqueAmong(lists, "List title must be unique"),
        ],
    )
}

/// Validates the new title of a list being renamed.
///
/// The list's own current title counts as taken, so renaming to the same
/// title is rejected.
///
/// # Errors
///
/// Returns every failed rule when the title is empty, too long, or already
/// used by any list.
pub fn renamed_list_title(raw: &str, lists: &TodoLists) -> Result<String, Vec<ValidationFailure>> {
    run(
        LIST_TITLE_FIELD,
        raw,
        &[
            Rule::Required("Title is required!"),
            Rule::MaxLength("Title must be shorter than 100 characters!"),
            Rule::UniqueAmong(lists, "Title must be unique or different!"),
        ],
    )
}

/// Validates the title of a todo about to be added.
///
/// # Errors
///
/// Returns every failed rule when the title is empty or too long.
pub fn todo_title(raw: &str) -> Result<String, Vec<ValidationFailure>> {
    run(
        TODO_TITLE_FIELD,
        raw,
        &[
            Rule::Required("The todo title is required"),
            Rule::MaxLength("Todo title must be between 1 and 100 characters"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(result: Result<String, Vec<ValidationFailure>>) -> Vec<String> {
        result
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|failure| failure.message)
            .collect()
    }

    fn with_titles(titles: &[&str]) -> TodoLists {
        let mut lists = TodoLists::new();
        for title in titles {
            lists.create(*title);
        }
        lists
    }

    #[test]
    fn accepts_and_trims() {
        let lists = with_titles(&["Work"]);
        assert_eq!(new_list_title("  Home  ", &lists), Ok("Home".to_string()));
    }

    #[test]
    fn blank_title_reports_required_only() {
        let lists = with_titles(&["Work"]);
        assert_eq!(
            messages(new_list_title("   ", &lists)),
            ["The list title is required"]
        );
    }

    #[test]
    fn length_boundary() {
        let lists = TodoLists::new();
        let hundred = "a".repeat(MAX_TITLE_LENGTH);
        assert!(new_list_title(&hundred, &lists).is_ok());

        let too_long = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(
            messages(new_list_title(&too_long, &lists)),
            ["List title must be between 1 and 100 characters"]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert!(todo_title(&title).is_ok());
    }

    #[test]
    fn duplicate_is_case_sensitive() {
        let lists = with_titles(&["Groceries"]);
        assert_eq!(
            messages(new_list_title("Groceries", &lists)),
            ["List title must be unique"]
        );
        assert!(new_list_title("groceries", &lists).is_ok());
    }

    #[test]
    fn duplicate_check_uses_trimmed_title() {
        let lists = with_titles(&["Groceries"]);
        assert!(new_list_title("  Groceries ", &lists).is_err());
    }

    #[test]
    fn rename_rejects_own_title() {
        let lists = with_titles(&["Groceries"]);
        assert_eq!(
            messages(renamed_list_title("Groceries", &lists)),
            ["Title must be unique or different!"]
        );
        assert_eq!(messages(renamed_list_title("", &lists)), ["Title is required!"]);
    }

    #[test]
    fn todo_titles_need_not_be_unique() {
        assert_eq!(todo_title(" Milk "), Ok("Milk".to_string()));
        assert_eq!(messages(todo_title("")), ["The todo title is required"]);
        let failures = todo_title(&"x".repeat(101)).err().unwrap_or_default();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, TODO_TITLE_FIELD);
    }
}
