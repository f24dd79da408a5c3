use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FieldKey;
use crate::sort::{SortMethod, SortOrder};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// Sorts the roster. With `commit` the sorted order replaces the stored order;
/// without it the result is only returned for display.
pub fn run<B: StorageBackend>(
    store: &mut StudentStore<B>,
    method: SortMethod,
    key: FieldKey,
    order: SortOrder,
    commit: bool,
) -> Result<CmdResult> {
    let sorted = method.sort(&store.get_all(), key, order);

    let mut result = CmdResult::default();
    if commit {
        store.replace_all(sorted.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Sorted by {} ({}, {}).",
            key, method, order
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Preview sorted by {} ({}, {}). Stored order unchanged.",
            key, method, order
        )));
    }
    Ok(result.with_listed_students(sorted))
}
