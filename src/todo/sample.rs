use super::priority::Priority;
use super::todo::Todo;
use chrono::NaiveDate;

fn sample(
    id: u32,
    text: &str,
    (y, m, d): (i32, u32, u32),
    checked: bool,
    priority: Priority,
) -> Todo {
    Todo {
        id,
        text: text.to_string(),
        datetime: NaiveDate::from_ymd_opt(y, m, d),
        checked,
        priority: Some(priority),
    }
}

/// Built-in sample list loaded when no seed file is configured
pub fn sample_todos() -> Vec<Todo> {
    vec![
        sample(4, "Task 2", (2024, 5, 3), false, Priority::low),
        sample(3, "Task 1", (2024, 5, 4), false, Priority::low),
        sample(2, "Expired Todo 2", (2024, 5, 2), false, Priority::medium),
        sample(1, "Expired Todo", (2024, 5, 1), true, Priority::high),
    ]
}
