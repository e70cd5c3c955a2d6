//! Applying a parsed search filter to todos.

use crate::query::{Completion, SearchFilter};
use crate::todo::Todo;

/// Check one todo against every active predicate of a filter.
///
/// Predicates all must pass; inactive ones are skipped. The text token is a
/// case-sensitive substring match on the title only. Due-date bounds are
/// strictly exclusive, and a todo without a due date passes both.
#[must_use]
pub fn matches(filter: &SearchFilter, todo: &Todo) -> bool {
    if let Some(text) = &filter.text {
        if !todo.title.contains(text.as_str()) {
            return false;
        }
    }

    match filter.completion {
        Completion::Any => {}
        Completion::Completed => {
            if !todo.is_completed {
                return false;
            }
        }
        Completion::Incomplete => {
            if todo.is_completed {
                return false;
            }
        }
    }

    if let (Some(after), Some(due)) = (filter.due_after, todo.due_date) {
        if due <= after {
            return false;
        }
    }

    if let (Some(before), Some(due)) = (filter.due_before, todo.due_date) {
        if due >= before {
            return false;
        }
    }

    true
}

/// Filter a slice of todos, preserving input order.
#[must_use]
pub fn apply<'a>(filter: &SearchFilter, todos: &'a [Todo]) -> Vec<&'a Todo> {
    todos.iter().filter(|todo| matches(filter, todo)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query_at;
    use chrono::{DateTime, TimeZone, Utc};

    fn todo(title: &str, completed: bool, due_date: Option<DateTime<Utc>>) -> Todo {
        Todo {
            id: format!("{title}-test"),
            title: title.to_string(),
            description: String::new(),
            is_completed: completed,
            due_date,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        ymd(2024, 5, 15)
    }

    #[test]
    fn test_default_filter_hides_completed() {
        let todos = vec![todo("Buy milk", false, None), todo("Pay bills", true, None)];
        let visible = apply(&SearchFilter::default(), &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
    }

    #[test]
    fn test_any_completion_shows_everything() {
        let todos = vec![todo("a", false, None), todo("b", true, None)];
        let filter = parse_query_at("status:all", now());
        assert_eq!(apply(&filter, &todos).len(), 2);
    }

    #[test]
    fn test_completed_only() {
        let todos = vec![todo("a", false, None), todo("b", true, None)];
        let filter = parse_query_at("status:done", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "b");
    }

    #[test]
    fn test_text_is_case_sensitive_substring() {
        let todos = vec![todo("Buy milk", false, None)];

        let filter = parse_query_at("ilk", now());
        assert_eq!(apply(&filter, &todos).len(), 1);

        let filter = parse_query_at("Milk", now());
        assert!(apply(&filter, &todos).is_empty());
    }

    #[test]
    fn test_text_matches_title_not_description() {
        let mut item = todo("Buy milk", false, None);
        item.description = "from the corner shop".to_string();
        let todos = vec![item];

        let filter = parse_query_at("corner", now());
        assert!(apply(&filter, &todos).is_empty());
    }

    #[test]
    fn test_due_after_is_exclusive() {
        let bound = ymd(2024, 1, 1);
        let todos = vec![
            todo("on the bound", false, Some(bound)),
            todo("after", false, Some(ymd(2024, 1, 2))),
            todo("before", false, Some(ymd(2023, 12, 31))),
        ];

        let filter = parse_query_at("due:>2024-01-01", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "after");
    }

    #[test]
    fn test_due_before_is_exclusive() {
        let todos = vec![
            todo("on the bound", false, Some(ymd(2024, 12, 31))),
            todo("before", false, Some(ymd(2024, 12, 30))),
        ];

        let filter = parse_query_at("due:<2024-12-31", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "before");
    }

    #[test]
    fn test_missing_due_date_passes_bounds() {
        let todos = vec![
            todo("undated", false, None),
            todo("too old", false, Some(ymd(2023, 1, 1))),
        ];

        let filter = parse_query_at("due:>2024-01-01", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "undated");
    }

    #[test]
    fn test_equal_bounds_keep_only_undated() {
        // A bare due: token pins both exclusive bounds to the same instant,
        // so every dated todo is excluded
        let todos = vec![
            todo("dated", false, Some(ymd(2024, 6, 1))),
            todo("undated", false, None),
        ];

        let filter = parse_query_at("due:2024-06-01", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "undated");
    }

    #[test]
    fn test_output_preserves_input_order() {
        let todos = vec![
            todo("c", false, None),
            todo("a", false, None),
            todo("b", false, None),
        ];

        let visible = apply(&SearchFilter::default(), &todos);
        let titles: Vec<&str> = visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_text_with_status_all() {
        let todos = vec![todo("Buy milk", false, None), todo("Pay bills", true, None)];
        let filter = parse_query_at("milk status:all", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
    }

    #[test]
    fn test_all_predicates_must_pass() {
        let todos = vec![
            todo("Buy milk", true, Some(ymd(2024, 6, 1))),
            todo("Buy milk", false, Some(ymd(2024, 6, 1))),
            todo("Buy milk", false, Some(ymd(2023, 6, 1))),
        ];

        let filter = parse_query_at("milk due:>2024-01-01", now());
        let visible = apply(&filter, &todos);
        assert_eq!(visible.len(), 1);
        assert!(!visible[0].is_completed);
        assert_eq!(visible[0].due_date, Some(ymd(2024, 6, 1)));
    }
}
