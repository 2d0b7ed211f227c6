//! Create/edit form for a single todo
//!
//! The form stages a draft, validates it on submit, and commits it to a
//! `TodoStore`. Submitting is split in two steps (`begin_submit` and
//! `finish_submit`) so the caller can show a progress indicator, or wait,
//! between validation and the commit. `submit` does both with no delay.
//!
//! ```text
//! Closed --open_create/open_edit--> Open --begin_submit--> Submitting
//!   ^                                |                         |
//!   +------------- cancel -----------+                         |
//!   +------------------------ finish_submit -------------------+
//! ```

use crate::notify::{Notice, Notifier};
use crate::todo::{Priority, Todo, TodoId, TodoStore};
use crate::validation::{self, ValidationError};
use chrono::NaiveDate;
use log::{debug, warn};
use thiserror::Error;

/// Working copy of the todo being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Todo being edited; `None` in create mode
    pub target: Option<TodoId>,
    pub text: String,
    pub date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub checked: bool,
}

impl Draft {
    /// Draft pre-populated from an existing todo
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            target: Some(todo.id),
            text: todo.text.clone(),
            date: todo.datetime,
            priority: todo.priority,
            checked: todo.checked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TodoId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Open,
    Submitting,
}

/// Validated change waiting to be applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCommit {
    Create {
        text: String,
        date: NaiveDate,
        priority: Option<Priority>,
    },
    Update(Todo),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The form is not open. Open it for a new or an existing todo first")]
    NotOpen,
    #[error("The form is busy saving the current todo")]
    Busy,
    #[error("No submit is in progress")]
    NotSubmitting,
    #[error("Completion can only be changed when editing an existing todo")]
    CheckedInCreateMode,
    #[error("Todo #{0} no longer exists")]
    NotFound(TodoId),
    #[error("No more todo ids are available")]
    IdsExhausted,
}

/// Form state machine around a single draft
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    draft: Draft,
    pending: Option<PendingCommit>,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            state: FormState::Closed,
            draft: Draft::default(),
            pending: None,
        }
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mode of the open (or submitting) form; `None` while closed
    pub fn mode(&self) -> Option<FormMode> {
        if self.state == FormState::Closed {
            return None;
        }
        Some(match self.draft.target {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        })
    }

    /// Heading shown above the form
    pub fn title(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Edit(_)) => "Edit Todo",
            _ => "Create Todo",
        }
    }

    /// Open the form with a blank draft
    pub fn open_create(&mut self) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.draft = Draft::default();
        self.state = FormState::Open;
        debug!("event=form_open module=form mode=create");
        Ok(())
    }

    /// Open the form with a draft copied from `todo`
    pub fn open_edit(&mut self, todo: &Todo) -> Result<(), FormError> {
        self.ensure_idle()?;
        self.draft = Draft::from_todo(todo);
        self.state = FormState::Open;
        debug!("event=form_open module=form mode=edit id={}", todo.id);
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), FormError> {
        self.ensure_open()?;
        self.draft.text = text.into();
        Ok(())
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) -> Result<(), FormError> {
        self.ensure_open()?;
        self.draft.date = date;
        Ok(())
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) -> Result<(), FormError> {
        self.ensure_open()?;
        self.draft.priority = priority;
        Ok(())
    }

    /// Change the completion flag; only offered when editing
    pub fn set_checked(&mut self, checked: bool) -> Result<(), FormError> {
        self.ensure_open()?;
        if self.draft.target.is_none() {
            return Err(FormError::CheckedInCreateMode);
        }
        self.draft.checked = checked;
        Ok(())
    }

    /// Close the form and throw the draft away
    ///
    /// Cancelling a closed form does nothing. An in-flight submit cannot be
    /// cancelled.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        match self.state {
            FormState::Submitting => Err(FormError::Busy),
            FormState::Closed => Ok(()),
            FormState::Open => {
                debug!("event=form_cancel module=form");
                self.close();
                Ok(())
            }
        }
    }

    /// Validate the draft and move to `Submitting`
    ///
    /// A validation failure is reported through `notifier` and leaves the
    /// form open with the draft intact.
    pub fn begin_submit(
        &mut self,
        notifier: &mut dyn Notifier,
    ) -> Result<PendingCommit, FormError> {
        match self.state {
            FormState::Closed => return Err(FormError::NotOpen),
            FormState::Submitting => return Err(FormError::Busy),
            FormState::Open => {}
        }

        let date = match validation::validate_draft(&self.draft) {
            Ok(date) => date,
            Err(e) => {
                debug!("event=form_submit module=form status=invalid reason={:?}", e);
                notifier.notify(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        let text = self.draft.text.trim().to_string();
        let pending = match self.draft.target {
            Some(id) => PendingCommit::Update(Todo {
                id,
                text,
                datetime: Some(date),
                checked: self.draft.checked,
                priority: self.draft.priority,
            }),
            None => PendingCommit::Create {
                text,
                date,
                priority: self.draft.priority,
            },
        };

        self.pending = Some(pending.clone());
        self.state = FormState::Submitting;
        debug!("event=form_submit module=form status=submitting");
        Ok(pending)
    }

    /// Apply the pending commit to `store` and close the form
    ///
    /// # Returns
    /// The created or updated todo
    pub fn finish_submit(
        &mut self,
        store: &mut TodoStore,
        notifier: &mut dyn Notifier,
    ) -> Result<Todo, FormError> {
        if self.state != FormState::Submitting {
            return Err(FormError::NotSubmitting);
        }
        let pending = self.pending.take().ok_or(FormError::NotSubmitting)?;
        self.close();

        match pending {
            PendingCommit::Create {
                text,
                date,
                priority,
            } => {
                let Some(todo) = store.add(text, date, priority) else {
                    let err = FormError::IdsExhausted;
                    notifier.notify(Notice::error(err.to_string()));
                    return Err(err);
                };
                notifier.notify(Notice::success("Todo added successfully!"));
                Ok(todo)
            }
            PendingCommit::Update(todo) => {
                if store.update(&todo).is_none() {
                    warn!(
                        "event=form_submit module=form status=missing_target id={}",
                        todo.id
                    );
                    let err = FormError::NotFound(todo.id);
                    notifier.notify(Notice::error(err.to_string()));
                    return Err(err);
                }
                notifier.notify(Notice::success("Todo updated successfully!"));
                Ok(todo)
            }
        }
    }

    /// Validate and commit in one step
    pub fn submit(
        &mut self,
        store: &mut TodoStore,
        notifier: &mut dyn Notifier,
    ) -> Result<Todo, FormError> {
        self.begin_submit(notifier)?;
        self.finish_submit(store, notifier)
    }

    fn ensure_idle(&self) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), FormError> {
        match self.state {
            FormState::Open => Ok(()),
            FormState::Closed => Err(FormError::NotOpen),
            FormState::Submitting => Err(FormError::Busy),
        }
    }

    fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = Draft::default();
        self.pending = None;
    }
}
