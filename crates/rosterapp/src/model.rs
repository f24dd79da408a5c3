//! # Domain Model
//!
//! This module defines the core data structures for roster: [`Student`], the raw
//! form-shaped [`StudentInput`], the partial [`StudentPatch`] used by updates, and
//! the [`FieldKey`] that names a sortable/searchable field.
//!
//! ## Value Semantics
//!
//! A [`Student`] is a value object. The store never edits a stored student in
//! place: an update builds a new student with [`Student::merged`] and swaps it in
//! at the same position. Snapshots handed to callers are clones, so nothing a
//! caller does to a snapshot can reach the store's own collection.
//!
//! ## Persisted Shape
//!
//! Students serialize as plain objects:
//!
//! ```text
//! { "id": "241011400248", "name": "Dimas", "email": "dimas@unpam.ac.id",
//!   "major": "Teknik Informatika", "gpa": 3.78 }
//! ```
//!
//! Older data files name the identifier `nim`; it is accepted as an alias when
//! reading and always written back as `id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};
use crate::validation;

/// One student entry. `id` is the uniqueness key across a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "nim")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    pub gpa: f64,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            gpa,
        }
    }

    /// Builds a replacement student: fields set in `patch` win, the rest are
    /// carried over from `self`.
    pub fn merged(&self, patch: &StudentPatch) -> Student {
        Student {
            id: patch.id.clone().unwrap_or_else(|| self.id.clone()),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            major: patch.major.clone().unwrap_or_else(|| self.major.clone()),
            gpa: patch.gpa.unwrap_or(self.gpa),
        }
    }

    /// String form of a field, as used by comparison and display.
    pub fn field_text(&self, key: FieldKey) -> Cow<'_, str> {
        match key {
            FieldKey::Id => Cow::Borrowed(&self.id),
            FieldKey::Name => Cow::Borrowed(&self.name),
            FieldKey::Email => Cow::Borrowed(&self.email),
            FieldKey::Major => Cow::Borrowed(&self.major),
            FieldKey::Gpa => Cow::Owned(self.gpa.to_string()),
        }
    }
}

/// Raw, unvalidated field values as a form (or an import file) supplies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    pub gpa: String,
}

impl StudentInput {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        gpa: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            gpa: gpa.into(),
        }
    }

    /// Trims surrounding whitespace from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            major: self.major.trim().to_string(),
            gpa: self.gpa.trim().to_string(),
        }
    }

    /// Reads a loosely typed JSON object into raw fields. `id` may also be
    /// spelled `nim`, and `id`/`gpa` may be JSON numbers. Missing or null fields
    /// come back empty. Returns `None` if `item` is not an object.
    pub fn from_json(item: &Value) -> Option<Self> {
        let Value::Object(map) = item else {
            return None;
        };
        let field = |name: &str| -> String {
            match map.get(name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            }
        };
        let id = if map.contains_key("id") {
            field("id")
        } else {
            field("nim")
        };
        Some(Self::new(
            id,
            field("name"),
            field("email"),
            field("major"),
            field("gpa"),
        ))
    }

    /// Validates and converts into a [`Student`].
    pub fn into_student(self) -> Result<Student> {
        validation::validate(&self)?;
        let gpa = self
            .gpa
            .parse::<f64>()
            .map_err(|_| RosterError::Validation(validation::ValidationError::Gpa))?;
        Ok(Student {
            id: self.id,
            name: self.name,
            email: self.email,
            major: self.major,
            gpa,
        })
    }
}

impl From<&Student> for StudentInput {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            major: student.major.clone(),
            gpa: student.gpa.to_string(),
        }
    }
}

/// Partial update: `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.major.is_none()
            && self.gpa.is_none()
    }
}

/// A field of [`Student`] that can drive sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Id,
    Name,
    Email,
    Major,
    Gpa,
}

impl FieldKey {
    pub fn all() -> &'static [FieldKey] {
        &[
            FieldKey::Id,
            FieldKey::Name,
            FieldKey::Email,
            FieldKey::Major,
            FieldKey::Gpa,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Id => "id",
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Major => "major",
            FieldKey::Gpa => "gpa",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "nim" => Ok(FieldKey::Id),
            "name" => Ok(FieldKey::Name),
            "email" => Ok(FieldKey::Email),
            "major" => Ok(FieldKey::Major),
            "gpa" => Ok(FieldKey::Gpa),
            other => Err(RosterError::Format(format!("unknown field: {}", other))),
        }
    }
}
