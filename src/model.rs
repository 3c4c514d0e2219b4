use serde::{Deserialize, Serialize};

/// One student record as stored.
///
/// All fields are free-form text at rest; field syntax is enforced at
/// submit time, not on stored data. The declaration order (name, id,
/// email, contact) is also the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub email: String,
    pub contact: String,
}

/// User-entered field values, not yet validated.
///
/// Surrounding whitespace is trimmed at construction, so validation and
/// storage always see the canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub id: String,
    pub email: String,
    pub contact: String,
}

impl StudentDraft {
    pub fn new(name: &str, id: &str, email: &str, contact: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            id: id.trim().to_string(),
            email: email.trim().to_string(),
            contact: contact.trim().to_string(),
        }
    }
}

impl From<StudentDraft> for Student {
    fn from(draft: StudentDraft) -> Self {
        Self {
            name: draft.name,
            id: draft.id,
            email: draft.email,
            contact: draft.contact,
        }
    }
}

/// Where the next submitted draft will land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Submit appends a new record.
    #[default]
    Create,
    /// Submit replaces the record at this index.
    Editing(usize),
}
