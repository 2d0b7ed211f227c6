//! User notifications ("toasts")
//!
//! The form reports every commit and every validation failure through a
//! `Notifier`. Delivery is fire-and-forget: nothing is returned to the caller.

use log::{info, warn};
use std::fmt;

/// Whether a notice reports success or a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "[success] {}", self.message),
            NoticeKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}

/// Sink for user notifications
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notifier that buffers notices until the caller drains them
///
/// Each notice is also written to the log.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Take all buffered notices, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!("event=notice kind=success message={:?}", notice.message),
            NoticeKind::Error => warn!("event=notice kind=error message={:?}", notice.message),
        }
        self.notices.push(notice);
    }
}
