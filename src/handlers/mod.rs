//! MCP tool handlers for the todo server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod delete;
pub mod form;
pub mod list;
pub mod reorder;
pub mod toggle;

use crate::notify::Notice;

/// Join notices into the text returned to the client, one per line
pub(crate) fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
