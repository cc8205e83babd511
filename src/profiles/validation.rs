//! Field validators shared by the setter groups and the combined update.
//!
//! Presence checks fail with a [`ProfileError`]; format checks are plain
//! predicates and never fail, so the update workflow can classify credential
//! quality without aborting.

use std::sync::OnceLock;

use regex::Regex;

use super::error::ProfileError;

/// Exact length of a student identifier number on the combined update path.
pub const STUDENT_IDENTIFIER_LENGTH: usize = 10;

/// Minimum number of characters in a strong password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters of which a strong password must contain at least one.
pub const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&+=";

/// Enrollment years must lie in `1..=ENROLLMENT_YEAR_MAX`.
pub const ENROLLMENT_YEAR_MAX: i32 = i32::MAX - 1;

const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$";

// Counts chars, not bytes; keep the repetition in sync with STUDENT_IDENTIFIER_LENGTH.
const STUDENT_IDENTIFIER_PATTERN: &str = r"^\p{Nd}{10}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

fn student_identifier_regex() -> Option<&'static Regex> {
    static STUDENT_IDENTIFIER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    STUDENT_IDENTIFIER_REGEX
        .get_or_init(|| Regex::new(STUDENT_IDENTIFIER_PATTERN).ok())
        .as_ref()
}

/// Rejects absent values and values that are empty once trimmed.
pub fn validate_non_empty(value: Option<&str>, field_label: &str) -> Result<(), ProfileError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ProfileError::empty_input(field_label)),
    }
}

pub fn validate_enrollment_year(year: i32) -> Result<(), ProfileError> {
    if year <= 0 || year > ENROLLMENT_YEAR_MAX {
        return Err(ProfileError::InvalidEnrollmentYear { year });
    }
    Ok(())
}

/// Dotted local part, `@`, one or more `label.` groups, then a 2-7 letter TLD.
pub fn is_valid_email_format(email: Option<&str>) -> bool {
    match (email, email_regex()) {
        (Some(email), Some(re)) => re.is_match(email),
        _ => false,
    }
}

/// Digit, lowercase, uppercase and special character present, no whitespace,
/// at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn is_strong_password_format(password: Option<&str>) -> bool {
    let Some(password) = password else {
        return false;
    };
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }
    if password.chars().any(is_excluded_password_char) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

/// Exactly [`STUDENT_IDENTIFIER_LENGTH`] characters, each a Unicode decimal
/// digit (general category Nd), so non-Latin digit scripts are accepted.
pub fn is_valid_student_identifier(identifier: Option<&str>) -> bool {
    match (identifier, student_identifier_regex()) {
        (Some(id), Some(re)) => re.is_match(id),
        _ => false,
    }
}

// ASCII whitespace (space, \t, \n, \x0B, \x0C, \r) plus the remaining line terminators.
#[inline]
fn is_excluded_password_char(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
