//! Case-insensitive substring filtering over student records.

use crate::model::Student;

/// Lowercases and trims a raw query string.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether a student matches a normalized query.
///
/// A match is a substring hit on the name or email (case-insensitive)
/// or on the id (ids are numeric, so plain containment). The contact
/// number is not searched. The empty query matches every record, so
/// clearing a search restores the full listing.
pub fn matches(student: &Student, normalized: &str) -> bool {
    if normalized.is_empty() {
        return true;
    }
    student.name.to_lowercase().contains(normalized)
        || student.email.to_lowercase().contains(normalized)
        || student.id.contains(normalized)
}

/// Filters `students` down to those matching `query`, preserving
/// insertion order. The query is normalized here; callers pass it raw.
pub fn filter_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    let normalized = normalize_query(query);
    students
        .iter()
        .filter(|student| matches(student, &normalized))
        .collect()
}
