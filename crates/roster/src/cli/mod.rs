//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`roster`)
//!
//! Running `roster` with no arguments defaults to `roster list`.
//!
//! ## Data Directory
//!
//! The roster lives in one directory, picked in this order:
//!
//! 1. `--data-dir <DIR>`
//! 2. `ROSTER_DATA_DIR`
//! 3. The platform data directory (`directories::ProjectDirs`)
//!
//! `roster.toml` in that directory configures the storage key, the export file
//! name and sample seeding.
//!
//! ## Sample Data
//!
//! When `seed_sample_data` is on and the roster is empty at startup, the sample
//! roster is seeded first. Commands that set the roster's contents themselves
//! (`clear`, `import`, `seed`) skip this step.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The level comes from `RUST_LOG`,
//! defaulting to `warn` (`debug` with `--verbose`).
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers that call the API
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
