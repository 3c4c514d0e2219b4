use super::StudentStore;
use crate::error::{Result, RosterError};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    payload: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every `save` fails with a store error. In-memory state
    /// must survive such a failure, so tests flip this to exercise the
    /// best-effort persistence path.
    pub fn set_simulate_write_error(&mut self, fail: bool) {
        self.simulate_write_error = fail;
    }

    /// The last payload handed to `save`, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StudentStore for InMemoryStore {
    fn save(&mut self, payload: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(RosterError::Store("simulated write error".to_string()));
        }
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Student;
    use crate::store::serialize_students;

    /// A plausible record whose id drives the other generated fields.
    pub fn student(name: &str, id: &str) -> Student {
        Student {
            name: name.to_string(),
            id: id.to_string(),
            email: format!("s{}@uni.edu", id),
            contact: format!("555000{:0>4}", id),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Pre-seeds the store with `count` valid records, ids 101 up.
        pub fn with_students(mut self, count: usize) -> Self {
            let students: Vec<Student> = (0..count)
                .map(|i| {
                    let letter = (b'A' + (i % 26) as u8) as char;
                    student(&format!("Student {}", letter), &format!("{}", 101 + i))
                })
                .collect();
            let payload = serialize_students(&students).unwrap();
            self.store.save(&payload).unwrap();
            self
        }

        /// Pre-seeds the store with an arbitrary raw payload, well-formed
        /// or not.
        pub fn with_raw_payload(mut self, payload: &str) -> Self {
            self.store.save(payload).unwrap();
            self
        }
    }
}
