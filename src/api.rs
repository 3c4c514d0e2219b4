//! # API Facade
//!
//! Single entry point for every roster intent, regardless of the UI in
//! front of it. The facade:
//!
//! - **Normalizes inputs**: callers select students by their stable id;
//!   the facade resolves that to the current store index, so a view that
//!   is filtered or stale can never delete the wrong record.
//! - **Dispatches** to the registry and collaborators.
//! - **Returns structured results** ([`CmdResult`]): visible rows, field
//!   errors, mode, and user-facing messages. Never prints.
//!
//! Generic over [`StudentStore`], so the whole surface runs against
//! `InMemoryStore` in tests and `FileStore` in production.

use crate::error::{Result, RosterError};
use crate::export;
use crate::filter::{matches, normalize_query};
use crate::model::{Student, StudentDraft};
use crate::outcome::{CmdMessage, CmdResult, StudentRow};
use crate::registry::{Roster, SubmitOutcome};
use crate::store::StudentStore;
use std::path::Path;

/// The main API facade for roster operations.
pub struct RosterApi<S: StudentStore> {
    roster: Roster<S>,
}

impl<S: StudentStore> RosterApi<S> {
    /// Opens the roster held by `store` and wraps it for intent
    /// dispatch.
    pub fn open(store: S) -> Self {
        Self {
            roster: Roster::open(store),
        }
    }

    /// Validates and commits a draft in whichever mode the roster is
    /// in. Rejection comes back in the result's field-error mapping,
    /// not as an `Err`; the caller re-renders the form with them.
    pub fn submit(&mut self, draft: StudentDraft) -> CmdResult {
        let mut result = CmdResult::default();
        match self.roster.submit(draft) {
            SubmitOutcome::Created(_) => {
                result.rows = self.rows("");
                result.add_message(CmdMessage::success("Student registered successfully!"));
            }
            SubmitOutcome::Updated(_) => {
                result.rows = self.rows("");
                result.add_message(CmdMessage::success("Student record updated successfully!"));
            }
            SubmitOutcome::Rejected(errors) => {
                result = result.with_errors(errors);
            }
        }
        self.finish(result)
    }

    /// Starts an edit session on the student with the given id and
    /// returns a copy of the record for prefilling a draft.
    pub fn begin_edit(&mut self, id: &str) -> Result<Student> {
        let index = self.position_or_not_found(id)?;
        self.roster.begin_edit(index)
    }

    /// Abandons any active edit session.
    pub fn cancel(&mut self) -> CmdResult {
        self.roster.cancel_edit();
        let result = CmdResult::default().with_rows(self.rows(""));
        self.finish(result)
    }

    /// Deletes the student with the given id.
    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        let index = self.position_or_not_found(id)?;
        self.roster.delete(index)?;
        let mut result = CmdResult::default().with_rows(self.rows(""));
        result.add_message(CmdMessage::success("Student record deleted successfully!"));
        Ok(self.finish(result))
    }

    /// The visible rows for a search query. An empty or blank query
    /// lists everything. Read-only; the edit cursor is untouched.
    pub fn list(&self, query: &str) -> CmdResult {
        CmdResult::default()
            .with_rows(self.rows(query))
            .with_mode(self.roster.mode())
    }

    /// Drops every record.
    pub fn clear_all(&mut self) -> CmdResult {
        self.roster.clear_all();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("All student records have been cleared!"));
        self.finish(result)
    }

    /// Writes the roster to `path` as CSV.
    pub fn export(&self, path: &Path) -> Result<CmdResult> {
        let written = export::write_csv(self.roster.students(), path)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Exported {} record(s) to {}",
            written,
            path.display()
        )));
        Ok(result)
    }

    /// Looks up a student by id without changing any state.
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.roster
            .students()
            .iter()
            .find(|student| student.id == id)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    fn position_or_not_found(&self, id: &str) -> Result<usize> {
        self.roster
            .position_of(id)
            .ok_or_else(|| RosterError::StudentNotFound(id.to_string()))
    }

    /// Rows matching `query`, numbered by full-roster position so the
    /// numbering is stable whether or not a filter is active.
    fn rows(&self, query: &str) -> Vec<StudentRow> {
        let normalized = normalize_query(query);
        self.roster
            .students()
            .iter()
            .enumerate()
            .filter(|(_, student)| matches(student, &normalized))
            .map(|(index, student)| StudentRow {
                position: index + 1,
                student: student.clone(),
            })
            .collect()
    }

    /// Stamps the current mode on an outgoing result and attaches any
    /// captured persistence failure as a warning.
    fn finish(&mut self, mut result: CmdResult) -> CmdResult {
        result.mode = self.roster.mode();
        if let Some(err) = self.roster.take_save_error() {
            result.add_message(CmdMessage::warning(format!(
                "Could not save changes: {} (records stay available this session)",
                err
            )));
        }
        result
    }
}
