use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

pub fn run<B: StorageBackend>(store: &StudentStore<B>) -> Result<CmdResult> {
    let students = store.get_all();
    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No students yet."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Showing {} students.",
            students.len()
        )));
    }
    Ok(result.with_listed_students(students))
}
