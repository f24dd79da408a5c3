//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every roster operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`StudentStore`] and the loaded [`RosterConfig`]
//! - **Dispatches** to the appropriate command function
//! - **Resolves defaults** from configuration (storage key, export file name)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout or stderr
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over StorageBackend
//!
//! `RosterApi<B: StorageBackend>` is generic over where the roster lives:
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`
//!
//! ## Testing Strategy
//!
//! API tests check that calls reach the right command with the right arguments.
//! Command behavior is tested in the command modules, storage in `store`.

use std::path::Path;

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::{FieldKey, StudentInput, StudentPatch};
use crate::search::{SearchKey, SearchMethod};
use crate::sort::{SortMethod, SortOrder};
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

/// The main API facade for roster operations.
pub struct RosterApi<B: StorageBackend> {
    store: StudentStore<B>,
    config: RosterConfig,
}

impl<B: StorageBackend> RosterApi<B> {
    pub fn new(store: StudentStore<B>, config: RosterConfig) -> Self {
        Self { store, config }
    }

    /// Opens the store over `backend` using the configured storage key.
    pub fn open(backend: B, config: RosterConfig) -> Self {
        let store = StudentStore::open(backend, config.storage_key.clone());
        Self::new(store, config)
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn store(&self) -> &StudentStore<B> {
        &self.store
    }

    pub fn add_student(&mut self, input: &StudentInput) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn update_student(
        &mut self,
        id: &str,
        patch: &StudentPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id.trim(), patch)
    }

    pub fn remove_students<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_ref().trim()).collect();
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn get_student(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id.trim())
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_students(
        &self,
        query: &str,
        method: SearchMethod,
        key: SearchKey,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, method, key)
    }

    /// Sorts and, unless `preview` is set, stores the sorted order.
    pub fn sort_students(
        &mut self,
        method: SortMethod,
        key: FieldKey,
        order: SortOrder,
        preview: bool,
    ) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store, method, key, order, !preview)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn import_json(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::import::import_json(&mut self.store, text)
    }

    /// Exports to `output`, or to the configured export file name inside `dir`.
    pub fn export(&self, dir: &Path, output: Option<&Path>) -> Result<commands::CmdResult> {
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => self.config.export_path(dir),
        };
        commands::export::run(&self.store, &path)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn seed_sample_data(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn algorithms(&self) -> commands::CmdResult {
        commands::algorithms::run()
    }
}
