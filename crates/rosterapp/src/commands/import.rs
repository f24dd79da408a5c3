use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Student, StudentInput};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;
use crate::validation;

/// Replaces the roster with the contents of the JSON file at `path`.
pub fn run<B: StorageBackend>(store: &mut StudentStore<B>, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path)?;
    let mut result = import_json(store, &text)?;
    result.add_message(CmdMessage::info(format!("Read {}", path.display())));
    Ok(result)
}

/// Replaces the roster with `text`, which must be a JSON array of student objects.
///
/// Every element is validated before anything is stored. The first bad element
/// fails the whole import and the store keeps its current contents.
pub fn import_json<B: StorageBackend>(store: &mut StudentStore<B>, text: &str) -> Result<CmdResult> {
    let students = parse_students(text)?;
    let count = students.len();
    store.replace_all(students.clone())?;
    info!(count, "roster imported");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} students.",
        count
    )));
    Ok(result.with_affected_students(students))
}

fn parse_students(text: &str) -> Result<Vec<Student>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| RosterError::Format(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(RosterError::Format(
            "expected a JSON array of students".to_string(),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let input = StudentInput::from_json(item)
                .ok_or_else(|| {
                    RosterError::Format(format!("record {} is not an object", index))
                })?
                .trimmed();
            validation::validate(&input)
                .map_err(|source| RosterError::InvalidRecord { index, source })?;
            input.into_student()
        })
        .collect()
}
