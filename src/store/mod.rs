//! # Storage Layer
//!
//! The [`StudentStore`] trait is the persistence boundary for the roster.
//! It moves one opaque payload string in and out; everything above it
//! works on typed [`Student`] values.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file in the data
//!   directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with a
//!   write-failure switch
//!
//! ## Payload Format
//!
//! A JSON array of student objects, fields in form order:
//!
//! ```text
//! [
//!   {
//!     "name": "Ann Lee",
//!     "id": "101",
//!     "email": "ann@uni.edu",
//!     "contact": "5550001111"
//!   }
//! ]
//! ```
//!
//! `load` distinguishes "nothing stored yet" (`Ok(None)`) from a real
//! I/O failure (`Err`). A first run has no payload and must not look
//! like an error.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait StudentStore {
    /// Write the full serialized roster, replacing any previous payload.
    fn save(&mut self, payload: &str) -> Result<()>;

    /// Read back the last saved payload, or `None` if nothing was ever
    /// saved.
    fn load(&self) -> Result<Option<String>>;
}

/// Serializes the roster to its JSON payload form.
pub fn serialize_students(students: &[Student]) -> Result<String> {
    Ok(serde_json::to_string_pretty(students)?)
}

/// Parses a JSON payload back into records. Callers decide how to treat
/// failure; the registry resets to empty rather than propagating.
pub fn deserialize_students(payload: &str) -> Result<Vec<Student>> {
    Ok(serde_json::from_str(payload)?)
}
