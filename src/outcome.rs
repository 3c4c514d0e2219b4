//! Structured results handed from the API facade to a presentation
//! layer. Nothing here prints; rendering is the caller's job.

use crate::model::{Mode, Student};
use crate::validate::ValidationErrors;

/// Severity of a user-facing message. Hard failures never travel as
/// messages; they propagate as [`RosterError`](crate::error::RosterError)
/// and the CLI reports them on stderr.
#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One visible table row: a record and its 1-based position in the full
/// roster. Positions are assigned before filtering, so a filtered view
/// numbers its rows the same way the full listing does.
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub position: usize,
    pub student: Student,
}

/// The outcome of one intent, ready to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub rows: Vec<StudentRow>,
    pub errors: Option<ValidationErrors>,
    pub mode: Mode,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<StudentRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}
