//! Field validation for student entries.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. `id`: 1 to 12 ASCII digits
//! 2. `name`: 3 to 50 letters (ASCII or Latin-1 `À`..`ÿ`) and spaces
//! 3. `email`: `local@domain.tld` where the TLD has at least two word characters
//! 4. `major`: any 2 to 50 characters on a single line
//! 5. `gpa`: 0 to 4.00 inclusive, at most two decimals
//!
//! Validation is pure and never panics; callers get a [`ValidationError`] or, through
//! [`validation_message`], a plain string that is empty on success.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::StudentInput;

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,12}$").expect("static regex compile"));

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\x{00C0}-\x{00FF}\s]{3,50}$").expect("static regex compile")
});

// `\w` here is the ASCII word class, hence the explicit sets.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z0-9_]{2,}$")
        .expect("static regex compile")
});

static MAJOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\n\r\x{2028}\x{2029}]{2,50}$").expect("static regex compile")
});

static GPA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-3](?:\.[0-9]{1,2})?|4(?:\.0{1,2})?)$").expect("static regex compile")
});

/// Validates every field of `input`, returning the first rule that fails.
///
/// # Examples
/// ```
/// use rosterapp::model::StudentInput;
/// use rosterapp::validation::{validate, ValidationError};
///
/// let ok = StudentInput::new("241011400248", "Dimas", "dimas@unpam.ac.id", "TI", "3.78");
/// assert!(validate(&ok).is_ok());
///
/// let bad = StudentInput::new("241011400248", "Dimas", "dimas@unpam.ac.id", "TI", "4.5");
/// assert_eq!(validate(&bad), Err(ValidationError::Gpa));
/// ```
pub fn validate(input: &StudentInput) -> Result<(), ValidationError> {
    if !ID_RE.is_match(&input.id) {
        return Err(ValidationError::Id);
    }
    if !NAME_RE.is_match(&input.name) {
        return Err(ValidationError::Name);
    }
    if !EMAIL_RE.is_match(&input.email) {
        return Err(ValidationError::Email);
    }
    if !MAJOR_RE.is_match(&input.major) {
        return Err(ValidationError::Major);
    }
    if !GPA_RE.is_match(&input.gpa) {
        return Err(ValidationError::Gpa);
    }
    Ok(())
}

/// Human-readable outcome of [`validate`]: the error message, or `""` when valid.
pub fn validation_message(input: &StudentInput) -> String {
    match validate(input) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Error type for field validation failures, one variant per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Id,
    Name,
    Email,
    Major,
    Gpa,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Id => write!(f, "Student id must be 1-12 digits."),
            ValidationError::Name => {
                write!(f, "Name must be 3-50 letters or spaces, without digits.")
            }
            ValidationError::Email => write!(f, "Email format is invalid."),
            ValidationError::Major => write!(f, "Major is required (2-50 characters)."),
            ValidationError::Gpa => write!(f, "GPA must be 0.00 - 4.00 (at most 2 decimals)."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StudentInput {
        StudentInput::new(
            "241011400248",
            "Dimas",
            "dimas@unpam.ac.id",
            "Teknik Informatika",
            "3.78",
        )
    }

    fn with(f: impl FnOnce(&mut StudentInput)) -> StudentInput {
        let mut input = valid();
        f(&mut input);
        input
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(validate(&valid()), Ok(()));
        assert_eq!(validation_message(&valid()), "");
    }

    #[test]
    fn test_id_rules() {
        assert!(validate(&with(|i| i.id = "1".into())).is_ok());
        assert!(validate(&with(|i| i.id = "123456789012".into())).is_ok());
        assert_eq!(
            validate(&with(|i| i.id = "1234567890123".into())),
            Err(ValidationError::Id)
        );
        assert_eq!(validate(&with(|i| i.id = "".into())), Err(ValidationError::Id));
        assert_eq!(validate(&with(|i| i.id = "12a".into())), Err(ValidationError::Id));
        // Non-ASCII digits are rejected.
        assert_eq!(validate(&with(|i| i.id = "١٢٣".into())), Err(ValidationError::Id));
    }

    #[test]
    fn test_name_rules() {
        assert!(validate(&with(|i| i.name = "AFFAN DHIYA DIL AWAR".into())).is_ok());
        assert!(validate(&with(|i| i.name = "José Müller".into())).is_ok());
        assert_eq!(validate(&with(|i| i.name = "Al".into())), Err(ValidationError::Name));
        assert_eq!(
            validate(&with(|i| i.name = "Agent 47".into())),
            Err(ValidationError::Name)
        );
        assert_eq!(
            validate(&with(|i| i.name = "a".repeat(51))),
            Err(ValidationError::Name)
        );
        assert!(validate(&with(|i| i.name = "a".repeat(50))).is_ok());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate(&with(|i| i.email = "ichsan.fachrulrozi@unpam.ac.id".into())).is_ok());
        assert!(validate(&with(|i| i.email = "a-b_c@x-y.io".into())).is_ok());
        assert_eq!(
            validate(&with(|i| i.email = "no-at-sign.com".into())),
            Err(ValidationError::Email)
        );
        assert_eq!(
            validate(&with(|i| i.email = "a@b.c".into())),
            Err(ValidationError::Email)
        );
        assert_eq!(
            validate(&with(|i| i.email = "a b@c.com".into())),
            Err(ValidationError::Email)
        );
    }

    #[test]
    fn test_major_rules() {
        assert!(validate(&with(|i| i.major = "SI".into())).is_ok());
        assert!(validate(&with(|i| i.major = "Teknik #1 (S1)".into())).is_ok());
        assert_eq!(validate(&with(|i| i.major = "X".into())), Err(ValidationError::Major));
        assert_eq!(
            validate(&with(|i| i.major = "line\nbreak".into())),
            Err(ValidationError::Major)
        );
        assert_eq!(
            validate(&with(|i| i.major = "m".repeat(51))),
            Err(ValidationError::Major)
        );
    }

    #[test]
    fn test_gpa_rules() {
        for ok in ["0", "3", "3.4", "3.45", "4", "4.0", "4.00", "0.00"] {
            assert!(validate(&with(|i| i.gpa = ok.into())).is_ok(), "{ok}");
        }
        for bad in ["4.01", "4.5", "5", "3.456", "-1", "", "3.", ".5", "abc"] {
            assert_eq!(
                validate(&with(|i| i.gpa = bad.into())),
                Err(ValidationError::Gpa),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let input = StudentInput::new("x", "1", "bad", "", "9");
        assert_eq!(validate(&input), Err(ValidationError::Id));

        let input = StudentInput::new("1", "1", "bad", "", "9");
        assert_eq!(validate(&input), Err(ValidationError::Name));
    }

    #[test]
    fn test_message_is_human_readable() {
        let msg = validation_message(&with(|i| i.gpa = "9".into()));
        assert!(msg.contains("GPA"));
    }
}
