//! Formatting helper functions for the todo list
//!
//! Date labels and expiry are computed against an explicit `today`, so the
//! same inputs always give the same output. Callers pass
//! `local_date_today()` for the real clock.

use crate::form::{FormController, FormState};
use crate::todo::{Todo, priority_options};
use chrono::NaiveDate;

/// Relative label for a due date
///
/// # Returns
/// "Today", "Tomorrow", or the date as `DD MMM YYYY` (e.g. "03 May 2024")
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%d %b %Y").to_string()
    }
}

/// Same as `format_date`, with "No date" when the date is absent
pub fn format_optional_date(date: Option<NaiveDate>, today: NaiveDate) -> String {
    match date {
        Some(d) => format_date(d, today),
        None => "No date".to_string(),
    }
}

/// Whether the due date is on a day before `today`
pub fn is_expired(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d < today)
}

/// Format a list snapshot into a display string
///
/// # Arguments
/// * `todos` - The todos in display order
/// * `today` - Reference day for date labels
pub fn format_todos(todos: &[Todo], today: NaiveDate) -> String {
    if todos.is_empty() {
        return "No Records".to_string();
    }

    let mut result = format!("Found {} todo(s):\n\n", todos.len());
    for (index, todo) in todos.iter().enumerate() {
        let mark = if todo.checked { "x" } else { " " };
        result.push_str(&format!("{}. [{}] #{} {}", index, mark, todo.id, todo.text));

        if let Some(priority) = todo.priority {
            result.push_str(&format!(" ({})", priority.label()));
        }
        result.push_str(&format!(
            " - {}",
            format_optional_date(todo.datetime, today)
        ));
        if is_expired(todo.datetime, today) {
            result.push_str(" (expired)");
        }
        result.push('\n');
    }

    result
}

/// Describe the form and its draft
pub fn format_draft(form: &FormController) -> String {
    let state = match form.state() {
        FormState::Closed => return "Form: closed".to_string(),
        FormState::Open => "open",
        FormState::Submitting => "saving",
    };

    let draft = form.draft();
    let mut result = format!("Form: {} ({})\n", form.title(), state);
    result.push_str(&format!("  Text: {}\n", draft.text));
    match draft.date {
        Some(date) => result.push_str(&format!("  Date: {}\n", date.format("%Y-%m-%d"))),
        None => result.push_str("  Date: (not selected)\n"),
    }
    match draft.priority {
        Some(priority) => result.push_str(&format!("  Priority: {}\n", priority.label())),
        None => result.push_str("  Priority: (none)\n"),
    }
    if draft.target.is_some() {
        result.push_str(&format!("  Completed: {}\n", draft.checked));
    }

    result
}

/// List the priority catalog as `key: Label` lines
pub fn format_priorities() -> String {
    priority_options()
        .into_iter()
        .map(|(key, label)| format!("- {}: {}", key, label))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_labels() {
        let today = date(2024, 5, 3);
        assert_eq!(format_date(date(2024, 5, 3), today), "Today");
        assert_eq!(format_date(date(2024, 5, 4), today), "Tomorrow");
        assert_eq!(format_date(date(2024, 5, 1), today), "01 May 2024");
        assert_eq!(format_date(date(2024, 5, 5), today), "05 May 2024");
    }

    #[test]
    fn test_format_date_across_year_end() {
        let today = date(2024, 12, 31);
        assert_eq!(format_date(date(2025, 1, 1), today), "Tomorrow");
        assert_eq!(format_date(date(2023, 12, 31), today), "31 Dec 2023");
    }

    #[test]
    fn test_is_expired() {
        let today = date(2024, 5, 3);
        assert!(is_expired(Some(date(2024, 5, 1)), today));
        assert!(!is_expired(Some(date(2024, 5, 3)), today));
        assert!(!is_expired(Some(date(2024, 5, 4)), today));
        assert!(!is_expired(None, today));
    }

    #[test]
    fn test_format_todos_sample() {
        let store = TodoStore::with_sample_data();
        let output = format_todos(store.todos(), date(2024, 5, 3));

        assert!(output.starts_with("Found 4 todo(s):"));
        assert!(output.contains("0. [ ] #4 Task 2 (Low) - Today\n"));
        assert!(output.contains("1. [ ] #3 Task 1 (Low) - Tomorrow\n"));
        assert!(output.contains("2. [ ] #2 Expired Todo 2 (Medium) - 02 May 2024 (expired)\n"));
        assert!(output.contains("3. [x] #1 Expired Todo (High) - 01 May 2024 (expired)\n"));
    }

    #[test]
    fn test_format_todos_empty() {
        assert_eq!(format_todos(&[], date(2024, 5, 3)), "No Records");
    }

    #[test]
    fn test_format_draft() {
        let mut form = FormController::new();
        assert_eq!(format_draft(&form), "Form: closed");

        form.open_create().unwrap();
        form.set_text("Buy milk").unwrap();
        let output = format_draft(&form);
        assert!(output.starts_with("Form: Create Todo (open)"));
        assert!(output.contains("Date: (not selected)"));
        assert!(!output.contains("Completed"));
    }

    #[test]
    fn test_format_priorities() {
        assert_eq!(format_priorities(), "- low: Low\n- medium: Medium\n- high: High");
    }
}
