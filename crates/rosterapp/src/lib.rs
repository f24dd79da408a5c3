//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library**. The `roster` binary is one
//! client of it; a web front end or a TUI could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (roster crate)                                   │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the loaded configuration              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, search, sort, import/export, statistics      │
//! │  - Returns CmdResult                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StudentStore: ordered roster, unique ids                 │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The search and sort libraries ([`search`], [`sort`]) sit beside the command layer.
//! They are pure functions over slices and know nothing about storage.
//!
//! ## Consistency
//!
//! The store writes the whole roster to its backend before it updates memory. A failed
//! write is returned as [`error::RosterError::Persistence`] and the in-memory roster is
//! left as it was, so memory and storage agree after every call.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests over `InMemoryStore`.
//! 2. **Search / sort**: unit tests plus `proptest` properties.
//! 3. **API**: dispatch tests.
//! 4. **Integration** (`tests/`): the file backend and config loading in a temp dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The student store, persistence adapter and backends
//! - [`model`]: Core data types (`Student`, `StudentInput`, `StudentPatch`, `FieldKey`)
//! - [`validation`]: Field format rules
//! - [`search`]: Linear, sequential and binary search
//! - [`sort`]: Insertion, selection, bubble, merge and shell sort
//! - [`collation`]: Text ordering used by sorting and binary search
//! - [`config`]: Configuration management
//! - [`sample`]: The built-in sample roster
//! - [`error`]: Error types

pub mod api;
pub mod collation;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sample;
pub mod search;
pub mod sort;
pub mod store;
pub mod validation;
