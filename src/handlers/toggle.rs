//! Toggle handler for the todo server

use crate::TodoServerHandler;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Sets the completion flag of a todo in place.
    pub async fn handle_toggle(&self, id: u32, checked: bool) -> McpResult<String> {
        let updated = self.session().store.set_checked(id, checked);

        Ok(match updated {
            Some(()) if checked => format!("Todo #{} marked as completed", id),
            Some(()) => format!("Todo #{} marked as not completed", id),
            None => format!("Todo #{} not found; nothing changed", id),
        })
    }
}
