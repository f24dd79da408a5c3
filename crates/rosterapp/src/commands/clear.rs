use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

pub fn run<B: StorageBackend>(store: &mut StudentStore<B>) -> Result<CmdResult> {
    let removed = store.len();
    store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All data cleared ({} students removed).",
        removed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_and_persists() {
        let mut fx = StoreFixture::new().with_three();
        let result = run(&mut fx.store).unwrap();
        assert!(fx.store.is_empty());
        assert!(fx.reopen().is_empty());
        assert!(result.messages[0].content.contains("3 students"));
    }

    #[test]
    fn clearing_empty_store_is_fine() {
        let mut fx = StoreFixture::new();
        run(&mut fx.store).unwrap();
        assert!(fx.store.is_empty());
    }
}
