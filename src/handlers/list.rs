//! List handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Renders the current snapshot, followed by the form state.
    pub async fn handle_list(&self) -> McpResult<String> {
        let session = self.session();
        let todos = session.store.snapshot();
        let form = formatting::format_draft(&session.form);
        drop(session);

        let today = (self.today)();
        Ok(format!(
            "{}\n{}",
            formatting::format_todos(&todos, today),
            form
        ))
    }

    /// Lists the priority catalog.
    pub async fn handle_priorities(&self) -> McpResult<String> {
        Ok(format!(
            "Priorities:\n{}",
            formatting::format_priorities()
        ))
    }
}
