//! # Storage Layer
//!
//! Two pieces cooperate here:
//!
//! 1. **The store** ([`student_store::StudentStore`]) owns the authoritative, ordered
//!    collection of students. It enforces id uniqueness and writes the whole
//!    collection back after every mutation.
//! 2. **The persistence adapter** ([`Persistence`]) turns that collection into a JSON
//!    string and hands it to a [`backend::StorageBackend`], a plain string-keyed slot
//!    store. Backends know nothing about students.
//!
//! ## Lifecycle
//!
//! - **Open**: the store hydrates once from its slot. A missing slot means an empty
//!   roster. Content that is not a JSON array is logged and also treated as empty, so
//!   a damaged file never blocks startup. Inside a readable array, elements are read
//!   one by one: an element without an id or a numeric GPA is logged and skipped, and
//!   its neighbours are kept.
//! - **Mutate**: `add`, `update`, `remove`, `replace_all` and `clear` build the next
//!   collection, persist it, and only then swap it into memory. A failed write is
//!   returned as [`RosterError::Persistence`] and memory keeps its previous state,
//!   so memory and storage never drift apart.
//! - **Close**: nothing to do; every mutation is already on disk.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot, atomic writes.
//! - [`mem_backend::MemBackend`]: in-memory slots for tests, with write-error simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── roster.toml          # Optional configuration
//! └── mahasiswa_data.json  # The roster slot (JSON array of students)
//! ```

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, RosterError};
use crate::model::{Student, StudentInput};
use backend::StorageBackend;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod student_store;

/// Binds a backend to the single slot the roster lives in and handles the
/// JSON encoding of the collection.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the slot. An absent slot is an empty roster.
    pub fn load(&self) -> Result<Vec<Student>> {
        match self.backend.read(&self.key)? {
            Some(text) => decode(&text),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrites the slot with the full collection.
    pub fn save(&self, students: &[Student]) -> Result<()> {
        let text = encode(students)?;
        self.backend
            .write(&self.key, &text)
            .map_err(|e| RosterError::Persistence(e.to_string()))?;
        debug!(key = %self.key, count = students.len(), "roster persisted");
        Ok(())
    }

    /// Deletes the slot entirely.
    pub fn clear(&self) -> Result<()> {
        self.backend
            .remove(&self.key)
            .map_err(|e| RosterError::Persistence(e.to_string()))
    }
}

/// Compact JSON array, the persisted representation.
pub fn encode(students: &[Student]) -> Result<String> {
    serde_json::to_string(students).map_err(RosterError::Serialization)
}

/// Reads a stored roster. The text must be a JSON array; elements that cannot
/// become a student are skipped with a warning.
pub fn decode(text: &str) -> Result<Vec<Student>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(RosterError::Format("stored roster is not a JSON array".to_string()));
    };
    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let student = stored_student(item);
            if student.is_none() {
                warn!(index, "skipping unreadable stored record");
            }
            student
        })
        .collect())
}

/// Stored records are trusted as written, so only the id and GPA are checked.
fn stored_student(item: &Value) -> Option<Student> {
    let input = StudentInput::from_json(item)?;
    let gpa = input.gpa.trim().parse::<f64>().ok().filter(|g| g.is_finite())?;
    if input.id.is_empty() {
        return None;
    }
    Some(Student::new(input.id, input.name, input.email, input.major, gpa))
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;

    fn rozi() -> Student {
        Student::new("241011400231", "Rozi", "rozi@unpam.ac.id", "TI", 3.89)
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let p = Persistence::new(MemBackend::new(), "roster");
        assert!(p.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let p = Persistence::new(MemBackend::new(), "roster");
        p.save(&[rozi()]).unwrap();
        assert_eq!(p.load().unwrap(), vec![rozi()]);
    }

    #[test]
    fn test_persisted_shape_is_plain_array() {
        let backend = MemBackend::new();
        let p = Persistence::new(backend.clone(), "roster");
        p.save(&[rozi()]).unwrap();

        let raw = backend.read("roster").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &value.as_array().unwrap()[0];
        assert_eq!(obj["id"], "241011400231");
        assert_eq!(obj["gpa"], 3.89);
        assert_eq!(obj.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_decode_corrupt_is_error() {
        assert!(matches!(
            decode("{not json"),
            Err(RosterError::Serialization(_))
        ));
        assert!(matches!(
            decode(r#""a string""#),
            Err(RosterError::Format(_))
        ));
    }

    #[test]
    fn test_decode_skips_unreadable_elements() {
        let text = r#"[
            {"nim": "1", "name": "Rozi", "email": "rozi@unpam.ac.id", "major": "TI", "gpa": 3.5},
            {"nim": "2", "name": "Nia", "email": "nia@unpam.ac.id", "major": "TI", "gpa": null},
            {"id": 3, "name": "Dimas", "email": "dimas@unpam.ac.id", "major": "TI", "gpa": "3.78"},
            {"name": "No Id", "email": "x@unpam.ac.id", "major": "TI", "gpa": 3.0},
            "not an object"
        ]"#;
        let students = decode(text).unwrap();
        let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(students[1].gpa, 3.78);
    }

    #[test]
    fn test_write_failure_maps_to_persistence_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let p = Persistence::new(backend, "roster");
        assert!(matches!(
            p.save(&[rozi()]),
            Err(RosterError::Persistence(_))
        ));
    }

    #[test]
    fn test_clear_removes_slot() {
        let backend = MemBackend::new();
        let p = Persistence::new(backend.clone(), "roster");
        p.save(&[rozi()]).unwrap();
        p.clear().unwrap();
        assert_eq!(backend.read("roster").unwrap(), None);
    }
}
