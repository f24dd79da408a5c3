use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// Removes every student in `ids`. All ids are checked first, so a missing id
/// fails the call before anything is removed.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut StudentStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    if let Some(missing) = ids.iter().find(|id| !store.contains(id.as_ref())) {
        return Err(RosterError::NotFound(missing.as_ref().to_string()));
    }

    let mut result = CmdResult::default();
    for id in ids {
        // Repeated ids in the request were already removed.
        if !store.contains(id.as_ref()) {
            continue;
        }
        let removed = store.remove(id.as_ref())?;
        result.add_message(CmdMessage::success(format!(
            "Student removed ({}): {}",
            removed.id, removed.name
        )));
        result.affected_students.push(removed);
    }
    Ok(result)
}
