//! Validation helper functions for the todo form
//!
//! This module contains the submit-time checks on a draft and the parsing of
//! raw tool arguments (dates and priority keys).

use crate::form::Draft;
use crate::todo::Priority;
use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a draft cannot be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field cannot be empty!!")]
    EmptyText,
    #[error("Please select a date")]
    MissingDate,
}

/// Check a draft before it is committed
///
/// Blank text is reported before a missing date.
///
/// # Returns
/// The selected date when the draft is valid
pub fn validate_draft(draft: &Draft) -> Result<NaiveDate, ValidationError> {
    if draft.text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    draft.date.ok_or(ValidationError::MissingDate)
}

/// Parse a date argument
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or a message for the user
pub fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2024-05-03')",
            date_str
        )
    })
}

/// Parse an optional date argument where "" clears the date
pub fn parse_optional_date(date_str: &str) -> Result<Option<NaiveDate>, String> {
    if date_str.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(date_str).map(Some)
    }
}

/// Parse a priority key where "" means unset
pub fn parse_priority(key: &str) -> Result<Option<Priority>, String> {
    if key.trim().is_empty() {
        Ok(None)
    } else {
        key.parse::<Priority>().map(Some)
    }
}
