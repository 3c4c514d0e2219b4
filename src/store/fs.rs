use super::StudentStore;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::PathBuf;

/// File-backed storage: the whole roster lives in one JSON file under
/// the data directory.
pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf, file_name: &str) -> Self {
        Self {
            root,
            file_name: file_name.to_string(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StudentStore for FileStore {
    fn save(&mut self, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.data_file(), payload).map_err(RosterError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_before_first_save_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("roster"), "students.json");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf(), "students.json");
        store.save("[{\"name\":\"Ann\"}]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[{\"name\":\"Ann\"}]"));
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("deep").join("nested");
        let mut store = FileStore::new(root.clone(), "students.json");
        store.save("[]").unwrap();
        assert!(root.join("students.json").exists());
    }

    #[test]
    fn save_replaces_previous_payload() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf(), "students.json");
        store.save("[1]").unwrap();
        store.save("[2]").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("[2]"));
    }
}
