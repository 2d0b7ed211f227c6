use super::priority::Priority;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store, unique within a session
pub type TodoId = u32;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique positive identifier, never reused within a session
    pub id: TodoId,
    /// Task description, stored trimmed and never empty
    pub text: String,
    /// Due date (format: YYYY-MM-DD); only absent in an unsaved draft
    pub datetime: Option<NaiveDate>,
    /// Completion flag
    #[serde(default)]
    pub checked: bool,
    /// Optional priority (low, medium, high); "" means unset
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::serde_impl::priority_key::deserialize"
    )]
    pub priority: Option<Priority>,
}
