//! The record registry: the ordered student collection and its edit
//! cursor, wired to a storage backend.
//!
//! All mutation goes through here. Every successful mutation is written
//! through to the store before control returns, so the persisted payload
//! always reflects the last committed state. Persistence is best-effort:
//! a failed save is captured and reported, never used to roll back or
//! abort the in-memory change.

use crate::error::{Result, RosterError};
use crate::model::{Mode, Student, StudentDraft};
use crate::store::{deserialize_students, serialize_students, StudentStore};
use crate::validate::{validate, ValidationErrors};
use tracing::{debug, warn};

/// What happened to a submitted draft.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Draft was valid in create mode; the new record was appended.
    Created(Student),
    /// Draft was valid in edit mode; the record under the cursor was
    /// replaced and the edit session ended.
    Updated(Student),
    /// Draft failed validation; nothing changed.
    Rejected(ValidationErrors),
}

/// The roster, generic over its storage backend.
pub struct Roster<S: StudentStore> {
    store: S,
    students: Vec<Student>,
    // Invariant: when Some, the index is in bounds. begin_edit checks,
    // delete reconciles, load and clear_all reset.
    editing: Option<usize>,
    save_error: Option<RosterError>,
}

impl<S: StudentStore> Roster<S> {
    /// Opens the roster from whatever the store holds. A store with no
    /// payload yet is an empty roster, not an error.
    pub fn open(store: S) -> Self {
        let mut roster = Self {
            store,
            students: Vec::new(),
            editing: None,
            save_error: None,
        };
        match roster.store.load() {
            Ok(Some(payload)) => roster.load(&payload),
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "could not read stored roster, starting empty");
            }
        }
        roster
    }

    /// Replaces the in-memory records wholesale from a serialized
    /// payload and ends any edit session. A payload that does not parse
    /// resets the roster to empty; a bad stored artifact must never
    /// wedge the application.
    pub fn load(&mut self, payload: &str) {
        match deserialize_students(payload) {
            Ok(students) => {
                debug!(count = students.len(), "loaded roster");
                self.students = students;
            }
            Err(err) => {
                warn!(error = %err, "discarding unreadable roster payload");
                self.students = Vec::new();
            }
        }
        self.editing = None;
    }

    /// Validates and commits a draft.
    ///
    /// With no edit session a valid draft is appended. With one, it
    /// replaces the record under the cursor in place (position kept) and
    /// the session ends. A rejected draft changes nothing, in either
    /// mode.
    pub fn submit(&mut self, draft: StudentDraft) -> SubmitOutcome {
        if let Err(errors) = validate(&draft, &self.students, self.editing) {
            return SubmitOutcome::Rejected(errors);
        }
        let student = Student::from(draft);
        let outcome = match self.editing.take() {
            Some(index) => {
                self.students[index] = student.clone();
                SubmitOutcome::Updated(student)
            }
            None => {
                self.students.push(student.clone());
                SubmitOutcome::Created(student)
            }
        };
        self.persist();
        outcome
    }

    /// Starts (or re-points) an edit session on the record at `index`
    /// and returns a copy of it for prefilling a draft.
    pub fn begin_edit(&mut self, index: usize) -> Result<Student> {
        let student = self.students.get(index).cloned().ok_or_else(|| {
            warn!(index, len = self.students.len(), "edit index out of range");
            RosterError::IndexOutOfRange {
                index,
                len: self.students.len(),
            }
        })?;
        self.editing = Some(index);
        Ok(student)
    }

    /// Ends any active edit session. Safe to call when none is active.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Removes the record at `index` and returns it.
    ///
    /// The edit cursor tracks the deletion: deleting the record under
    /// edit ends the session, deleting an earlier record shifts the
    /// cursor down so it stays on the same student, deleting a later one
    /// leaves it alone.
    pub fn delete(&mut self, index: usize) -> Result<Student> {
        if index >= self.students.len() {
            warn!(index, len = self.students.len(), "delete index out of range");
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.students.len(),
            });
        }
        let student = self.students.remove(index);
        self.editing = match self.editing {
            Some(cursor) if cursor == index => None,
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };
        self.persist();
        Ok(student)
    }

    /// Drops every record and any edit session, and persists the empty
    /// roster.
    pub fn clear_all(&mut self) {
        self.students.clear();
        self.editing = None;
        self.persist();
    }

    /// The most recent persistence failure, if any, clearing it. The
    /// presentation layer turns this into a user-visible warning.
    pub fn take_save_error(&mut self) -> Option<RosterError> {
        self.save_error.take()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(index) => Mode::Editing(index),
            None => Mode::Create,
        }
    }

    /// Current index of the record with the given id. Ids are unique
    /// under normal operation, so the first hit is the record.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let payload = match serialize_students(&self.students) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "could not serialize roster");
                self.save_error = Some(err);
                return;
            }
        };
        if let Err(err) = self.store.save(&payload) {
            warn!(error = %err, "could not persist roster");
            self.save_error = Some(err);
        }
    }
}
