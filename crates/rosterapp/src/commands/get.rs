use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

pub fn run<B: StorageBackend>(store: &StudentStore<B>, id: &str) -> Result<CmdResult> {
    let student = store.get(id)?;
    Ok(CmdResult::default().with_listed_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_id() {
        let fx = StoreFixture::new().with_three();
        let result = run(&fx.store, "241011400231").unwrap();
        assert_eq!(result.listed_students[0].name, "Rozi");
    }

    #[test]
    fn missing_is_not_found() {
        let fx = StoreFixture::new().with_three();
        assert!(matches!(run(&fx.store, "7"), Err(RosterError::NotFound(_))));
    }
}
