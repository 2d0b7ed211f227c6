//! Delete handler for the todo server

use crate::TodoServerHandler;
use crate::handlers::render_notices;
use crate::notify::{Notice, NoticeLog, Notifier};
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Removes a todo. An unknown ID changes nothing and is not an error.
    pub async fn handle_delete(&self, id: u32) -> McpResult<String> {
        let removed = self.session().store.remove(id);

        match removed {
            Some(todo) => {
                let mut notices = NoticeLog::new();
                notices.notify(Notice::success("Todo deleted successfully!"));
                Ok(format!(
                    "{}\nDeleted #{} {}",
                    render_notices(notices.notices()),
                    todo.id,
                    todo.text
                ))
            }
            None => Ok(format!("Todo #{} not found; nothing changed", id)),
        }
    }
}
