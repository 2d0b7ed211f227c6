//! Form handlers for the todo server
//!
//! open_form → edit_draft → submit (or cancel), mirroring the create/edit
//! dialog: the draft lives in the session between calls.

use crate::handlers::render_notices;
use crate::notify::NoticeLog;
use crate::validation;
use crate::{FormError, Priority, TodoServerHandler, TodoSession, formatting};
use chrono::NaiveDate;
use log::debug;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Opens the form in create mode (no id) or edit mode (existing id).
    pub async fn handle_open_form(&self, id: Option<u32>) -> McpResult<String> {
        let mut session = self.session();

        let opened = match id {
            None => session.form.open_create(),
            Some(id) => {
                let Some(todo) = session.store.get(id).cloned() else {
                    drop(session);
                    bail_public!(
                        _,
                        "Todo not found: Todo #{} does not exist. Use list() to see available todos.",
                        id
                    );
                };
                session.form.open_edit(&todo)
            }
        };

        if let Err(e) = opened {
            drop(session);
            bail_public!(_, "{}", e);
        }

        Ok(formatting::format_draft(&session.form))
    }

    /// Changes the given draft fields; absent arguments are left alone.
    pub async fn handle_edit_draft(
        &self,
        text: Option<String>,
        date: Option<String>,
        priority: Option<String>,
        checked: Option<bool>,
    ) -> McpResult<String> {
        // Parse everything before touching the draft so a bad argument
        // leaves it unchanged
        let date = match date.as_deref().map(validation::parse_optional_date) {
            Some(Ok(d)) => Some(d),
            Some(Err(msg)) => {
                bail_public!(_, "{}", msg);
            }
            None => None,
        };
        let priority = match priority.as_deref().map(validation::parse_priority) {
            Some(Ok(p)) => Some(p),
            Some(Err(msg)) => {
                bail_public!(_, "{}", msg);
            }
            None => None,
        };

        let mut session = self.session();
        if let Err(e) = apply_draft_edits(&mut session, text, date, priority, checked) {
            drop(session);
            bail_public!(_, "{}", e);
        }

        Ok(formatting::format_draft(&session.form))
    }

    /// Validates the draft, waits for the configured delay, then commits it.
    ///
    /// The session lock is released while waiting; the form sits in
    /// `Submitting` so another submit cannot slip in.
    pub async fn handle_submit(&self) -> McpResult<String> {
        let mut notices = NoticeLog::new();

        let begun = self.session().form.begin_submit(&mut notices);
        if let Err(e) = begun {
            match e {
                FormError::Validation(_) => {
                    bail_public!(_, "{}", render_notices(notices.notices()));
                }
                other => {
                    bail_public!(_, "{}", other);
                }
            }
        }

        if !self.submit_delay.is_zero() {
            debug!(
                "event=form_submit module=mcp status=waiting delay_ms={}",
                self.submit_delay.as_millis()
            );
            tokio::time::sleep(self.submit_delay).await;
        }

        let result = {
            let mut session = self.session();
            let TodoSession { store, form } = &mut *session;
            form.finish_submit(store, &mut notices)
        };

        match result {
            Ok(todo) => Ok(format!(
                "{}\nSaved #{} {}",
                render_notices(notices.notices()),
                todo.id,
                todo.text
            )),
            Err(_) => {
                bail_public!(_, "{}", render_notices(notices.notices()));
            }
        }
    }

    /// Closes the form without saving.
    pub async fn handle_cancel(&self) -> McpResult<String> {
        if let Err(e) = self.session().form.cancel() {
            bail_public!(_, "{}", e);
        }
        Ok("Form closed; draft discarded".to_string())
    }
}

fn apply_draft_edits(
    session: &mut TodoSession,
    text: Option<String>,
    date: Option<Option<NaiveDate>>,
    priority: Option<Option<Priority>>,
    checked: Option<bool>,
) -> Result<(), FormError> {
    let form = &mut session.form;
    // Checked first: it is the only edit that can fail on an open form
    if let Some(checked) = checked {
        form.set_checked(checked)?;
    }
    if let Some(text) = text {
        form.set_text(text)?;
    }
    if let Some(date) = date {
        form.set_date(date)?;
    }
    if let Some(priority) = priority {
        form.set_priority(priority)?;
    }
    Ok(())
}
