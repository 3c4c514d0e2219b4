//! CSV export of the roster.

use crate::error::{Result, RosterError};
use crate::model::Student;
use std::fs;
use std::path::Path;

/// Column headers, matching the four form fields.
pub const CSV_HEADER: &str = "Student Name,Student ID,Email,Contact Number";

/// Renders records as CSV: header first, then one line per record in
/// store order.
///
/// Fields are joined verbatim, with no quoting or escaping. A comma
/// inside a field (possible in data loaded from an externally produced
/// payload) shifts that row's columns.
pub fn to_csv(students: &[Student]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for student in students {
        out.push_str(&student.name);
        out.push(',');
        out.push_str(&student.id);
        out.push(',');
        out.push_str(&student.email);
        out.push(',');
        out.push_str(&student.contact);
        out.push('\n');
    }
    out
}

/// Writes the roster to `path` as CSV and returns the number of data
/// rows written. An empty roster is refused, not written as a
/// header-only file.
pub fn write_csv(students: &[Student], path: &Path) -> Result<usize> {
    if students.is_empty() {
        return Err(RosterError::Api("No data to export!".to_string()));
    }
    fs::write(path, to_csv(students)).map_err(RosterError::Io)?;
    Ok(students.len())
}
