//! # Command Layer
//!
//! This module contains the **core business logic** of roster. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate user input before it reaches the store
//! - Call the store, the sort library and the search library
//! - Return structured `CmdResult` with affected/listed students and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr or formatting. (Import and export do touch
//!   the file they are pointed at; that is their job.)
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts or confirmations (return data, UI decides)
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` / `StoreFixture` so no filesystem is needed, except for the
//! import/export file round trips which use a temp dir.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate and add a student
//! - [`update`]: Merge a partial update into a student
//! - [`delete`]: Remove students by id
//! - [`get`]: Fetch one student (edit flow)
//! - [`list`]: The whole roster in stored order
//! - [`search`]: Linear / sequential / binary search
//! - [`sort`]: Sort with one of five algorithms, optionally committing the order
//! - [`import`]: Replace the roster from a JSON file
//! - [`export`]: Write the roster to a JSON file
//! - [`clear`]: Empty the roster
//! - [`stats`]: Dashboard figures
//! - [`seed`]: Seed the sample roster into an empty store
//! - [`algorithms`]: Complexity table for every search and sort method

use crate::model::Student;
use crate::sort::Complexity;
use serde::Serialize;
use std::path::PathBuf;

pub mod algorithms;
pub mod clear;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod search;
pub mod seed;
pub mod sort;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Dashboard figures. GPA figures are `0.0` on an empty roster.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub average_gpa: f64,
    pub max_gpa: f64,
    pub major_count: usize,
}

/// One row of the complexity table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub complexity: Complexity,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Students created, changed or removed by the command.
    pub affected_students: Vec<Student>,
    /// Students to display.
    pub listed_students: Vec<Student>,
    pub stats: Option<RosterStats>,
    pub algorithms: Vec<AlgorithmInfo>,
    /// File written by the command (export).
    pub written_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_stats(mut self, stats: RosterStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }
}
