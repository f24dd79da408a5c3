use super::backend::StorageBackend;
use super::Persistence;
use crate::error::{Result, RosterError};
use crate::model::{Student, StudentPatch};
use std::collections::HashSet;
use tracing::{info, warn};

/// The authoritative, ordered roster.
///
/// Insertion order is the default display and export order; only
/// [`replace_all`](Self::replace_all) reorders. Every mutating call persists the whole
/// collection before it returns, and memory is only updated once that write succeeds.
pub struct StudentStore<B: StorageBackend> {
    students: Vec<Student>,
    persistence: Persistence<B>,
}

impl<B: StorageBackend> StudentStore<B> {
    /// Opens the store and hydrates it from `key`.
    ///
    /// A slot that cannot be read, or is not a JSON array, is logged and the store
    /// starts empty. Unreadable elements inside an array are skipped on their own.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let persistence = Persistence::new(backend, key);
        let students = match persistence.load() {
            Ok(students) => dedupe(students, persistence.key()),
            Err(e) => {
                warn!(
                    key = %persistence.key(),
                    error = %e,
                    "could not read roster, starting empty"
                );
                Vec::new()
            }
        };
        Self {
            students,
            persistence,
        }
    }

    /// Snapshot of the roster. Changes to the returned vector never reach the store.
    pub fn get_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn get(&self, id: &str) -> Result<Student> {
        self.position(id)
            .map(|idx| self.students[idx].clone())
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Appends `student`. Fails with `DuplicateKey` if the id is taken.
    pub fn add(&mut self, student: Student) -> Result<()> {
        if self.contains(&student.id) {
            return Err(RosterError::DuplicateKey(student.id));
        }
        let mut next = self.students.clone();
        next.push(student);
        self.commit(next)
    }

    /// Replaces the student `id` with a copy that has `patch` merged in, at the
    /// same position. Returns the replacement.
    ///
    /// Fails with `NotFound` if `id` is absent, and with `DuplicateKey` if the
    /// patch renames the student to an id held by someone else.
    pub fn update(&mut self, id: &str, patch: &StudentPatch) -> Result<Student> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        let replacement = self.students[idx].merged(patch);

        if replacement.id != id && self.contains(&replacement.id) {
            return Err(RosterError::DuplicateKey(replacement.id));
        }

        let mut next = self.students.clone();
        next[idx] = replacement.clone();
        self.commit(next)?;
        Ok(replacement)
    }

    /// Removes and returns the student `id`. Fails with `NotFound` if absent.
    pub fn remove(&mut self, id: &str) -> Result<Student> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        let mut next = self.students.clone();
        let removed = next.remove(idx);
        self.commit(next)?;
        Ok(removed)
    }

    /// Replaces the whole roster (after a sort or an import).
    ///
    /// The incoming set must have unique ids; otherwise nothing changes and the
    /// first repeated id is reported as `DuplicateKey`.
    pub fn replace_all(&mut self, students: Vec<Student>) -> Result<()> {
        if let Some(dup) = first_duplicate(&students) {
            return Err(RosterError::DuplicateKey(dup.to_string()));
        }
        let count = students.len();
        self.commit(students)?;
        info!(count, "roster replaced");
        Ok(())
    }

    /// Empties the roster and deletes its slot.
    pub fn clear(&mut self) -> Result<()> {
        self.persistence.clear()?;
        self.students.clear();
        info!(key = %self.persistence.key(), "roster cleared");
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    fn commit(&mut self, next: Vec<Student>) -> Result<()> {
        self.persistence.save(&next)?;
        self.students = next;
        Ok(())
    }
}

fn first_duplicate(students: &[Student]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(students.len());
    students
        .iter()
        .map(|s| s.id.as_str())
        .find(|id| !seen.insert(*id))
}

/// Hydrated data should already be unique; if it is not, keep the first entry
/// for each id rather than refusing to start.
fn dedupe(students: Vec<Student>, key: &str) -> Vec<Student> {
    let mut seen = HashSet::with_capacity(students.len());
    let before = students.len();
    let unique: Vec<Student> = students
        .into_iter()
        .filter(|s| seen.insert(s.id.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            key,
            dropped = before - unique.len(),
            "stored roster had duplicate ids, keeping first occurrences"
        );
    }
    unique
}
