//! Todo MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a single
//! in-memory todo list. Todos have a text, a due date, a priority and a
//! completion flag; they can be created, edited, deleted, reordered and
//! checked off. Nothing is persisted: the list starts from seed data and
//! lives for one session.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Turns tool calls into list and form operations
//! - **Form Layer**: `form` module - Draft staging, validation and commit
//! - **Domain Layer**: `todo` module - Todo records and the ordered `TodoStore`
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::{TodoConfig, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::from_config(&TodoConfig::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod form;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod notify;
pub mod seed;
pub mod todo;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

// Re-export commonly used types
pub use config::TodoConfig;
pub use form::{Draft, FormController, FormError, FormMode, FormState};
pub use notify::{Notice, NoticeKind, NoticeLog, Notifier};
pub use seed::SeedSource;
pub use todo::{Priority, Todo, TodoId, TodoStore};
pub use validation::ValidationError;

/// Everything one client session works on
#[derive(Debug, Default)]
pub struct TodoSession {
    pub store: TodoStore,
    pub form: FormController,
}

/// MCP Server handler for the todo list
///
/// Owns the session behind a mutex. Each tool call locks it, applies one
/// operation and releases it; the lock is never held across the submit delay.
pub struct TodoServerHandler {
    pub(crate) session: Mutex<TodoSession>,
    pub(crate) submit_delay: Duration,
    pub(crate) today: fn() -> NaiveDate,
}

impl TodoServerHandler {
    /// Create a handler around an already loaded store
    pub fn new(store: TodoStore, config: &TodoConfig) -> Self {
        Self {
            session: Mutex::new(TodoSession {
                store,
                form: FormController::new(),
            }),
            submit_delay: config.submit_delay(),
            today: todo::local_date_today,
        }
    }

    /// Create a handler, loading the seed data named in `config`
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::{TodoConfig, TodoServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::from_config(&TodoConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &TodoConfig) -> Result<Self> {
        let source = match &config.seed_file {
            Some(path) => SeedSource::file(path),
            None => SeedSource::builtin(),
        };
        let store = source.load()?;
        Ok(Self::new(store, config))
    }

    /// Replace the clock used for "Today"/"Tomorrow" labels
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Current list snapshot
    pub fn snapshot(&self) -> Arc<Vec<Todo>> {
        self.session().store.snapshot()
    }

    /// Current state of the form
    pub fn form_state(&self) -> FormState {
        self.session().form.state()
    }

    pub(crate) fn session(&self) -> MutexGuard<'_, TodoSession> {
        // A panic mid-operation cannot leave the store half written: every
        // mutation swaps in a complete snapshot.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Todo list manager. Todos have a text, a due date (YYYY-MM-DD), an optional
/// priority (low/medium/high) and a completed flag. New todos appear at the top.
///
/// Key concepts:
/// - **list**: Show the list with "Today"/"Tomorrow" labels and expired markers
/// - **form**: open_form → edit_draft → submit (or cancel) to create or edit a todo
/// - **delete/toggle/reorder**: Direct list gestures, applied immediately
///
/// Todo IDs are numbers assigned by the server: 1, 2, 3...
/// Positions (for reorder) are 0-based indices as shown by list.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Review**: Show every todo in order with its date label, plus the form state.
    #[tool]
    async fn list(&self) -> McpResult<String> {
        self.handle_list().await
    }

    /// **Catalog**: Show the selectable priorities (key: Label).
    #[tool]
    async fn priorities(&self) -> McpResult<String> {
        self.handle_priorities().await
    }

    /// **Form**: Open the form. Without id: create a new todo. With id: edit that todo.
    /// **Workflow**: 1) open_form → 2) edit_draft → 3) submit (or cancel).
    #[tool]
    async fn open_form(
        &self,
        /// ID of the todo to edit; omit to create a new todo
        id: Option<u32>,
    ) -> McpResult<String> {
        self.handle_open_form(id).await
    }

    /// **Form**: Change fields of the open draft. Only the given fields change.
    /// **Tip**: Use ""(empty string) to clear the date or the priority.
    #[tool]
    async fn edit_draft(
        &self,
        /// Task description
        text: Option<String>,
        /// Due date YYYY-MM-DD, ""=clear
        date: Option<String>,
        /// Priority: low/medium/high, ""=none
        priority: Option<String>,
        /// Completed flag (edit mode only)
        checked: Option<bool>,
    ) -> McpResult<String> {
        self.handle_edit_draft(text, date, priority, checked).await
    }

    /// **Form**: Validate and save the draft. Text must not be empty and a date must be selected.
    #[tool]
    async fn submit(&self) -> McpResult<String> {
        self.handle_submit().await
    }

    /// **Form**: Close the form and discard the draft.
    #[tool]
    async fn cancel(&self) -> McpResult<String> {
        self.handle_cancel().await
    }

    /// **Delete**: Remove a todo from the list.
    #[tool]
    async fn delete(
        &self,
        /// ID of the todo to delete
        id: u32,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }

    /// **Complete**: Mark a todo as done or not done. Its position does not change.
    #[tool]
    async fn toggle(
        &self,
        /// ID of the todo
        id: u32,
        /// true=completed, false=open
        checked: bool,
    ) -> McpResult<String> {
        self.handle_toggle(id, checked).await
    }

    /// **Reorder**: Drag the todo at position `from` and drop it at position `to`.
    /// **Tip**: Omit `to` to cancel the drag; nothing changes.
    #[tool]
    async fn reorder(
        &self,
        /// Current 0-based position
        from: u32,
        /// Target 0-based position (optional)
        to: Option<u32>,
    ) -> McpResult<String> {
        self.handle_reorder(from, to).await
    }
}
