//! Draft validation for student records.
//!
//! A draft is accepted when:
//! - `name` is non-empty and contains only letters and whitespace
//! - `id` is non-empty, all decimal digits, and not already taken
//! - `email` has the shape `local@domain.tld` with no whitespace
//! - `contact` is exactly 10 decimal digits
//!
//! Every field is checked independently; a failing field never hides
//! another field's failure. Within one field the first failing rule wins.

use crate::model::{Student, StudentDraft};
use std::collections::BTreeMap;
use std::fmt;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Id,
    Email,
    Contact,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::Email => "email",
            Field::Contact => "contact",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-to-message mapping for a rejected draft.
///
/// At most one message per field. Iteration follows form order
/// (name, id, email, contact).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    fn put(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

/// Validates a draft against the current records.
///
/// `editing` is the index of the record being edited, if any; that record
/// is excluded from the duplicate-id check so an edit can re-save its own
/// id unchanged. Pure function of its inputs.
pub fn validate(
    draft: &StudentDraft,
    students: &[Student],
    editing: Option<usize>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(message) = check_name(&draft.name) {
        errors.put(Field::Name, message);
    }
    if let Some(message) = check_id(&draft.id, students, editing) {
        errors.put(Field::Id, message);
    }
    if let Some(message) = check_email(&draft.email) {
        errors.put(Field::Email, message);
    }
    if let Some(message) = check_contact(&draft.contact) {
        errors.put(Field::Contact, message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `id` is already used by a record other than the one at
/// `editing`.
pub fn is_duplicate_id(id: &str, students: &[Student], editing: Option<usize>) -> bool {
    students
        .iter()
        .enumerate()
        .any(|(index, student)| student.id == id && Some(index) != editing)
}

fn check_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("Student name is required");
    }
    if !name.chars().all(is_name_char) {
        return Some("Name should contain only letters and spaces");
    }
    None
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

fn check_id(id: &str, students: &[Student], editing: Option<usize>) -> Option<&'static str> {
    if id.is_empty() {
        return Some("Student ID is required");
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Some("Student ID should contain only numbers");
    }
    if is_duplicate_id(id, students, editing) {
        return Some("Student ID already exists");
    }
    None
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Email is required");
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address");
    }
    None
}

/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, non-empty
/// local part, and a final `.` in the domain with non-empty segments on
/// both sides. The local part and the domain may themselves contain dots.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

fn check_contact(contact: &str) -> Option<&'static str> {
    if contact.is_empty() {
        return Some("Contact number is required");
    }
    if contact.len() != 10 || !contact.chars().all(|c| c.is_ascii_digit()) {
        return Some("Contact number should be exactly 10 digits");
    }
    None
}
