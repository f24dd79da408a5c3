use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentInput, StudentPatch};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;
use crate::validation;

/// Merges `patch` into student `id`. The merged record must pass validation.
pub fn run<B: StorageBackend>(
    store: &mut StudentStore<B>,
    id: &str,
    patch: &StudentPatch,
) -> Result<CmdResult> {
    let current = store.get(id)?;
    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let candidate = current.merged(patch);
    validation::validate(&StudentInput::from(&candidate))?;

    let updated = store.update(id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated ({}): {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_students(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validation::ValidationError;

    #[test]
    fn updates_only_given_fields() {
        let mut fx = StoreFixture::new().with_three();
        let patch = StudentPatch {
            major: Some("Sistem Informasi".into()),
            ..Default::default()
        };
        run(&mut fx.store, "241011400248", &patch).unwrap();

        let s = fx.store.get("241011400248").unwrap();
        assert_eq!(s.major, "Sistem Informasi");
        assert_eq!(s.name, "Dimas");
        assert_eq!(s.gpa, 3.78);
        assert_eq!(fx.store.get_all()[0].id, "241011400248");
    }

    #[test]
    fn rejects_invalid_merged_record() {
        let mut fx = StoreFixture::new().with_three();
        let patch = StudentPatch {
            gpa: Some(4.5),
            ..Default::default()
        };
        let err = run(&mut fx.store, "241011400248", &patch).unwrap_err();
        assert!(matches!(err, RosterError::Validation(ValidationError::Gpa)));
        assert_eq!(fx.store.get("241011400248").unwrap().gpa, 3.78);
    }

    #[test]
    fn rejects_three_decimal_gpa() {
        let mut fx = StoreFixture::new().with_three();
        let patch = StudentPatch {
            gpa: Some(3.456),
            ..Default::default()
        };
        assert!(run(&mut fx.store, "241011400248", &patch).is_err());
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut fx = StoreFixture::new().with_three();
        let patch = StudentPatch {
            name: Some("Nobody".into()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut fx.store, "1", &patch),
            Err(RosterError::NotFound(_))
        ));
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut fx = StoreFixture::new().with_three();
        let result = run(&mut fx.store, "241011400248", &StudentPatch::default()).unwrap();
        assert!(result.affected_students.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(
            run(&mut fx.store, "404", &StudentPatch::default()),
            Err(RosterError::NotFound(_))
        ));
    }
}
