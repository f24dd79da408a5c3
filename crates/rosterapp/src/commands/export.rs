use std::fs;
use std::path::Path;
use tracing::info;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// Writes the roster, in stored order, to `path` as pretty-printed JSON.
pub fn run<B: StorageBackend>(store: &StudentStore<B>, path: &Path) -> Result<CmdResult> {
    let students = store.get_all();
    fs::write(path, export_json(&students)?)?;
    info!(path = %path.display(), count = students.len(), "roster exported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} students to {}",
        students.len(),
        path.display()
    )));
    Ok(result.with_written_path(path.to_path_buf()))
}

/// Two-space indented JSON array.
pub fn export_json(students: &[Student]) -> Result<String> {
    Ok(serde_json::to_string_pretty(students)?)
}
