//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use todo_mcp::{TodoConfig, TodoId, TodoServerHandler, TodoStore};

/// Reference "today" used by every date-sensitive test
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Ids of the store front to back
pub fn ids(store: &TodoStore) -> Vec<TodoId> {
    store.todos().iter().map(|t| t.id).collect()
}

/// Handler over the sample list with the clock pinned to `fixed_today`
pub fn get_test_handler() -> TodoServerHandler {
    TodoServerHandler::new(TodoStore::with_sample_data(), &TodoConfig::default())
        .with_clock(fixed_today)
}

/// Handler that waits `delay_ms` between validation and commit
pub fn get_delayed_handler(delay_ms: u64) -> TodoServerHandler {
    let config = TodoConfig {
        submit_delay_ms: delay_ms,
        ..TodoConfig::default()
    };
    TodoServerHandler::new(TodoStore::with_sample_data(), &config).with_clock(fixed_today)
}
