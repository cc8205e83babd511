//! University member profile: entity, validation and the combined update.

pub mod error;
pub mod model;
pub mod summarize;
pub mod update;
pub mod validation;

pub use error::ProfileError;
pub use model::ProfileRecord;
pub use summarize::{summarize_profile, ProfileSummary};
pub use update::{report_update, ProfileUpdateOutcome, ProfileUpdateRequest, UpdateStatus};
pub use validation::{
    is_strong_password_format, is_valid_email_format, is_valid_student_identifier,
    validate_non_empty,
};
