//! # Comparator
//!
//! Ordering used by every sort and by binary search.
//!
//! - `gpa` compares numerically.
//! - Every other field compares its text with [`locale_cmp`], a small
//!   locale-style collation tuned for the names this roster holds:
//!   1. **Primary**: case-insensitive, with Latin-1 accents folded to their base
//!      letter (`é` sorts with `e`, `Æ` as `ae`).
//!   2. **Secondary**: case-insensitive with accents kept (`e` before `é`).
//!   3. **Tertiary**: lowercase before uppercase (`a` before `A`).
//!
//! Strings only compare `Equal` when they are identical, so the comparator is a
//! total order and every sort built on it is deterministic.

use std::cmp::Ordering;

use crate::model::{FieldKey, Student};

/// Compares two students by `key`.
pub fn compare(a: &Student, b: &Student, key: FieldKey) -> Ordering {
    match key {
        FieldKey::Gpa => a.gpa.total_cmp(&b.gpa),
        _ => locale_cmp(&a.field_text(key), &b.field_text(key)),
    }
}

/// Locale-style string comparison (see module docs).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| b.cmp(a))
}

/// Case-insensitive sort key. Two strings have equal keys exactly when their
/// lowercase forms are equal, and ordering by this key agrees with [`locale_cmp`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let secondary = s.to_lowercase();
        let mut primary = String::with_capacity(secondary.len());
        for c in secondary.chars() {
            fold_into(c, &mut primary);
        }
        Self { primary, secondary }
    }
}

fn fold_into(c: char, out: &mut String) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        'ß' => "ss",
        _ => {
            out.push(c);
            return;
        }
    };
    out.push_str(base);
}
