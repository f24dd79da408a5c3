use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentInput;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// Validates `input` (after trimming) and appends the student.
pub fn run<B: StorageBackend>(store: &mut StudentStore<B>, input: &StudentInput) -> Result<CmdResult> {
    let student = input.trimmed().into_student()?;
    store.add(student.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added ({}): {}",
        student.id, student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}
