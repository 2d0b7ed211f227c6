//! Reorder handler for the todo server

use crate::TodoServerHandler;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Moves the todo at `from` to `to`, like dropping a dragged card.
    ///
    /// A missing or out-of-range target cancels the drag.
    pub async fn handle_reorder(&self, from: u32, to: Option<u32>) -> McpResult<String> {
        let moved = self
            .session()
            .store
            .reorder(from as usize, to.map(|t| t as usize));

        Ok(match (moved, to) {
            (Some(()), Some(to)) => format!("Moved todo from position {} to {}", from, to),
            _ => "Reorder cancelled; nothing changed".to_string(),
        })
    }
}
