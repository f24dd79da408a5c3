use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::{SearchKey, SearchMethod};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

pub fn run<B: StorageBackend>(
    store: &StudentStore<B>,
    query: &str,
    method: SearchMethod,
    key: SearchKey,
) -> Result<CmdResult> {
    let query = query.trim();
    let students = store.get_all();
    let found = method.search(&students, query, key);

    let mut result = CmdResult::default();
    if query.is_empty() {
        result.add_message(CmdMessage::info("Empty query, showing all students."));
    } else if found.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No results for \"{}\" ({}, {}).",
            query, method, key
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Search ({}, {}): {} found.",
            method,
            key,
            found.len()
        )));
    }
    Ok(result.with_listed_students(found))
}
