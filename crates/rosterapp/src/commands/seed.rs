use tracing::warn;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::sample::sample_inputs;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// Adds the sample roster, but only to an empty store. Entries that fail
/// validation or collide with an earlier entry are skipped.
pub fn run<B: StorageBackend>(store: &mut StudentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !store.is_empty() {
        result.add_message(CmdMessage::info(
            "Roster already has data, sample not seeded.",
        ));
        return Ok(result);
    }

    let mut skipped = 0;
    for input in sample_inputs() {
        let id = input.id.clone();
        let added = input
            .into_student()
            .and_then(|student| store.add(student.clone()).map(|_| student));
        match added {
            Ok(student) => result.affected_students.push(student),
            Err(e @ RosterError::Persistence(_)) => return Err(e),
            Err(e) => {
                warn!(id = %id, error = %e, "skipping sample entry");
                skipped += 1;
            }
        }
    }

    let mut message = format!("Seeded {} sample students", result.affected_students.len());
    if skipped > 0 {
        message.push_str(&format!(" ({} skipped)", skipped));
    }
    message.push('.');
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn seeds_valid_entries_into_empty_store() {
        let mut fx = StoreFixture::new();
        let result = run(&mut fx.store).unwrap();
        assert_eq!(fx.store.len(), 27);
        assert_eq!(result.affected_students.len(), 27);
        assert_eq!(result.messages[0].content, "Seeded 27 sample students (1 skipped).");
        assert!(!fx.store.contains("2410114002544"));
        assert_eq!(fx.reopen().len(), 27);
    }

    #[test]
    fn does_not_touch_populated_store() {
        let mut fx = StoreFixture::new().with_three();
        let result = run(&mut fx.store).unwrap();
        assert!(result.affected_students.is_empty());
        assert_eq!(fx.store.len(), 3);
    }

    #[test]
    fn write_failure_is_surfaced() {
        let mut fx = StoreFixture::new();
        fx.backend.set_simulate_write_error(true);
        assert!(matches!(run(&mut fx.store), Err(RosterError::Persistence(_))));
        assert!(fx.store.is_empty());
    }
}
