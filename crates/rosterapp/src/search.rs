//! # Search Library
//!
//! - **Linear / sequential**: substring filter in input order. `id` matches
//!   case-sensitively, `name` case-insensitively, `all` accepts either.
//! - **Binary**: exact, case-insensitive, full-string match on `id` or `name`.
//!   The input is first insertion-sorted by that key (so the O(n²) sort dominates;
//!   this is a teaching search, not a fast path), then a classic binary search finds
//!   one hit and walks left and right to collect every neighbour with the same key.
//!
//! Searches never mutate their input and return owned copies.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::collation::{compare, CollationKey};
use crate::error::{Result, RosterError};
use crate::model::{FieldKey, Student};
use crate::sort::{insertion_sort, Complexity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Linear,
    Sequential,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKey {
    Id,
    Name,
    #[default]
    All,
}

impl SearchMethod {
    pub fn all() -> &'static [SearchMethod] {
        &[
            SearchMethod::Linear,
            SearchMethod::Sequential,
            SearchMethod::Binary,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::Linear => "linear",
            SearchMethod::Sequential => "sequential",
            SearchMethod::Binary => "binary",
        }
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            SearchMethod::Linear | SearchMethod::Sequential => Complexity {
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
            },
            SearchMethod::Binary => Complexity {
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
            },
        }
    }

    /// Runs this search. An empty (or blank) query returns every student.
    pub fn search(&self, students: &[Student], query: &str, key: SearchKey) -> Vec<Student> {
        if query.trim().is_empty() {
            return students.to_vec();
        }
        match self {
            SearchMethod::Linear => linear_search(students, query, key),
            SearchMethod::Sequential => sequential_search(students, query, key),
            SearchMethod::Binary => binary_search(students, query, key),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(SearchMethod::Linear),
            "sequential" => Ok(SearchMethod::Sequential),
            "binary" => Ok(SearchMethod::Binary),
            other => Err(RosterError::Format(format!(
                "unknown search method: {}",
                other
            ))),
        }
    }
}

impl SearchKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKey::Id => "id",
            SearchKey::Name => "name",
            SearchKey::All => "all",
        }
    }

    /// The single field binary search runs on: `name` for `Name`, `id` otherwise.
    pub fn binary_field(&self) -> FieldKey {
        match self {
            SearchKey::Name => FieldKey::Name,
            SearchKey::Id | SearchKey::All => FieldKey::Id,
        }
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "nim" => Ok(SearchKey::Id),
            "name" => Ok(SearchKey::Name),
            "all" => Ok(SearchKey::All),
            other => Err(RosterError::Format(format!("unknown search key: {}", other))),
        }
    }
}

pub fn linear_search(students: &[Student], query: &str, key: SearchKey) -> Vec<Student> {
    let query_lower = query.to_lowercase();
    let id_matches = |s: &Student| s.id.contains(query);
    let name_matches = |s: &Student| s.name.to_lowercase().contains(&query_lower);

    students
        .iter()
        .filter(|s| match key {
            SearchKey::Id => id_matches(s),
            SearchKey::Name => name_matches(s),
            SearchKey::All => id_matches(s) || name_matches(s),
        })
        .cloned()
        .collect()
}

/// Same scan as [`linear_search`]; kept as its own entry point for the UI.
pub fn sequential_search(students: &[Student], query: &str, key: SearchKey) -> Vec<Student> {
    linear_search(students, query, key)
}

pub fn binary_search(students: &[Student], query: &str, key: SearchKey) -> Vec<Student> {
    let field = key.binary_field();
    let sorted = insertion_sort(students, |a, b| compare(a, b, field));
    let target = CollationKey::new(query);
    let key_at = |i: usize| CollationKey::new(&sorted[i].field_text(field));

    let mut matches = Vec::new();
    let (mut low, mut high) = (0usize, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match key_at(mid).cmp(&target) {
            Ordering::Equal => {
                matches.push(sorted[mid].clone());
                let mut l = mid;
                while l > 0 && key_at(l - 1) == target {
                    l -= 1;
                    matches.push(sorted[l].clone());
                }
                let mut r = mid + 1;
                while r < sorted.len() && key_at(r) == target {
                    matches.push(sorted[r].clone());
                    r += 1;
                }
                break;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    matches
}
