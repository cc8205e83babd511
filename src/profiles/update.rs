//! Combined profile update: identifier check, all three setter groups and a
//! credential-quality status.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::error::ProfileError;
use super::model::ProfileRecord;
use super::validation::{
    is_strong_password_format, is_valid_email_format, is_valid_student_identifier,
};

/// Inputs of [`ProfileRecord::update_full_profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub student_identifier_number: Option<String>,
    #[serde(default)]
    pub program_study: Option<String>,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub enrollment_year: i32,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Credential quality reported after a successful combined update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Complete,
    WeakPassword,
    InvalidEmail,
    InvalidEmailAndWeakPassword,
}

impl UpdateStatus {
    pub fn classify(email_valid: bool, password_strong: bool) -> Self {
        match (email_valid, password_strong) {
            (true, true) => Self::Complete,
            (true, false) => Self::WeakPassword,
            (false, true) => Self::InvalidEmail,
            (false, false) => Self::InvalidEmailAndWeakPassword,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Complete => "UPDATE COMPLETE!",
            Self::WeakPassword => "PLEASE USE A BETTER PASSWORD",
            Self::InvalidEmail => "PLEASE CHECK YOUR EMAIL",
            Self::InvalidEmailAndWeakPassword => {
                "THIS IS A JOKE, RIGHT? PLEASE USE A VALID EMAIL AND A STRONG PASSWORD"
            }
        }
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateOutcome {
    pub profile_id: Uuid,
    pub status: UpdateStatus,
    pub email_valid: bool,
    pub password_strong: bool,
    pub years_since_enrollment: Option<i32>,
}

impl ProfileRecord {
    /// Runs the full update. Format flags are taken from the request before
    /// anything is assigned; a failing setter group stops the update and
    /// leaves earlier groups applied.
    pub fn update_full_profile(
        &mut self,
        request: &ProfileUpdateRequest,
    ) -> Result<ProfileUpdateOutcome, ProfileError> {
        if !is_valid_student_identifier(request.student_identifier_number.as_deref()) {
            return Err(ProfileError::InvalidIdentifier);
        }

        let email_valid = is_valid_email_format(request.email.as_deref());
        let password_strong = is_strong_password_format(request.password.as_deref());

        self.set_academic_affiliation(
            request.program_study.as_deref(),
            request.faculty.as_deref(),
            request.enrollment_year,
        )?;
        debug!(profile_id = %self.id(), group = "academic_affiliation", "Profile group applied");
        self.set_credentials(
            request.email.as_deref(),
            request.password.as_deref(),
            request.user_name.as_deref(),
        )?;
        debug!(profile_id = %self.id(), group = "credentials", "Profile group applied");
        self.set_personal_info(
            request.first_name.as_deref(),
            request.last_name.as_deref(),
            request.gender.as_deref(),
            request.student_identifier_number.as_deref(),
        )?;
        debug!(profile_id = %self.id(), group = "personal_info", "Profile group applied");

        let years_since_enrollment = self.years_since_enrollment();
        let status = UpdateStatus::classify(email_valid, password_strong);
        debug!(
            profile_id = %self.id(),
            email_valid,
            password_strong,
            ?years_since_enrollment,
            status = ?status,
            "Profile update classified"
        );

        Ok(ProfileUpdateOutcome {
            profile_id: self.id(),
            status,
            email_valid,
            password_strong,
            years_since_enrollment,
        })
    }
}

/// Writes the status message of an update, one line.
pub fn report_update<W: Write>(outcome: &ProfileUpdateOutcome, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", outcome.status)
}
