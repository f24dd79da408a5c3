use super::mem_backend::MemBackend;
use super::student_store::StudentStore;

pub type InMemoryStore = StudentStore<MemBackend>;

/// Slot name used by in-memory stores built with [`InMemoryStore::new`].
pub const MEMORY_KEY: &str = "roster";

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        StudentStore::open(MemBackend::new(), MEMORY_KEY)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Student;

    /// The three students used throughout the examples and tests.
    pub fn three_students() -> Vec<Student> {
        vec![
            Student::new(
                "241011400248",
                "Dimas",
                "dimas@unpam.ac.id",
                "Teknik Informatika",
                3.78,
            ),
            Student::new(
                "241011402051",
                "Afdal Laia",
                "afdal.laia@unpam.ac.id",
                "Teknik Informatika",
                3.45,
            ),
            Student::new(
                "241011400231",
                "Rozi",
                "rozi@unpam.ac.id",
                "Sistem Informasi",
                3.89,
            ),
        ]
    }

    pub struct StoreFixture {
        pub backend: MemBackend,
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let backend = MemBackend::new();
            Self {
                store: StudentStore::open(backend.clone(), MEMORY_KEY),
                backend,
            }
        }

        pub fn with_students(mut self, students: Vec<Student>) -> Self {
            for student in students {
                self.store.add(student).unwrap();
            }
            self
        }

        pub fn with_three(self) -> Self {
            self.with_students(three_students())
        }

        pub fn with_generated(mut self, count: usize) -> Self {
            for i in 0..count {
                let student = Student::new(
                    format!("{}", 1000 + i),
                    format!("Student {}", i + 1),
                    format!("student{}@unpam.ac.id", i + 1),
                    "Teknik Informatika",
                    (i % 5) as f64 * 0.5 + 2.0,
                );
                self.store.add(student).unwrap();
            }
            self
        }

        /// Opens a second store over the same slots, as a new session would.
        pub fn reopen(&self) -> InMemoryStore {
            StudentStore::open(self.backend.clone(), MEMORY_KEY)
        }
    }
}
