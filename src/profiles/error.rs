use thiserror::Error;

/// Caller-input violations raised by profile setters and the combined update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{field} should not be null, empty, or blank.")]
    EmptyInput { field: String },

    #[error("Enrollment year should be a positive integer.")]
    InvalidEnrollmentYear { year: i32 },

    #[error("Student identifier number is not valid.")]
    InvalidIdentifier,
}

impl ProfileError {
    pub(crate) fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Label of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyInput { field } => field,
            Self::InvalidEnrollmentYear { .. } => "Enrollment year",
            Self::InvalidIdentifier => "Student identifier number",
        }
    }
}
