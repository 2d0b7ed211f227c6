mod common;

use common::{date, fixed_today};
use todo_mcp::formatting::{format_date, format_optional_date, format_todos, is_expired};
use todo_mcp::{Priority, TodoStore};

#[test]
fn test_format_date_reference_day() {
    let today = fixed_today();
    assert_eq!(format_date(date(2024, 5, 3), today), "Today");
    assert_eq!(format_date(date(2024, 5, 4), today), "Tomorrow");
    assert_eq!(format_date(date(2024, 5, 1), today), "01 May 2024");
    assert_eq!(format_date(date(2024, 5, 2), today), "02 May 2024");
    assert_eq!(format_date(date(2025, 5, 3), today), "03 May 2025");
}

#[test]
fn test_format_date_month_end() {
    let today = date(2024, 2, 29);
    assert_eq!(format_date(date(2024, 3, 1), today), "Tomorrow");
    assert_eq!(format_date(date(2024, 3, 2), today), "02 Mar 2024");
}

#[test]
fn test_format_optional_date() {
    assert_eq!(format_optional_date(None, fixed_today()), "No date");
    assert_eq!(
        format_optional_date(Some(date(2024, 5, 4)), fixed_today()),
        "Tomorrow"
    );
}

#[test]
fn test_is_expired_reference_day() {
    let today = fixed_today();
    assert!(is_expired(Some(date(2024, 5, 1)), today));
    assert!(is_expired(Some(date(2024, 5, 2)), today));
    assert!(!is_expired(Some(date(2024, 5, 3)), today));
    assert!(!is_expired(None, today));
}

#[test]
fn test_format_todos_follows_list_order() {
    let mut store = TodoStore::with_sample_data();
    store.add("Buy milk", date(2024, 5, 10), Some(Priority::medium));
    store.reorder(0, Some(2));

    let output = format_todos(store.todos(), fixed_today());
    let lines: Vec<&str> = output.lines().skip(2).collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "0. [ ] #4 Task 2 (Low) - Today");
    assert_eq!(lines[2], "2. [ ] #5 Buy milk (Medium) - 10 May 2024");
}

#[test]
fn test_format_todos_without_priority() {
    let mut store = TodoStore::new();
    store.add("Plain", date(2024, 5, 1), None);
    let output = format_todos(store.todos(), fixed_today());
    assert!(output.contains("0. [ ] #1 Plain - 01 May 2024 (expired)"));
}
