//! The university member profile entity.
//!
//! Fields start out unset and are filled by three setter groups (academic
//! affiliation, credentials, personal info). Each group validates every input
//! before assigning anything, but groups are independent of each other.

use std::fmt;

use chrono::{Datelike, Local};
use uuid::Uuid;

use super::error::ProfileError;
use super::validation::{
    is_strong_password_format, is_valid_email_format, validate_enrollment_year,
    validate_non_empty,
};

/// Not `Clone`: a record owns its identifier, and fields are only reachable
/// through the validating setter groups.
pub struct ProfileRecord {
    id: Uuid,
    program_study: Option<String>,
    faculty: Option<String>,
    enrollment_year: Option<i32>,
    email: Option<String>,
    password: Option<String>,
    user_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    student_identifier_number: Option<String>,
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            program_study: None,
            faculty: None,
            enrollment_year: None,
            email: None,
            password: None,
            user_name: None,
            first_name: None,
            last_name: None,
            gender: None,
            student_identifier_number: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn program_study(&self) -> Option<&str> {
        self.program_study.as_deref()
    }

    pub fn faculty(&self) -> Option<&str> {
        self.faculty.as_deref()
    }

    pub fn enrollment_year(&self) -> Option<i32> {
        self.enrollment_year
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn student_identifier_number(&self) -> Option<&str> {
        self.student_identifier_number.as_deref()
    }

    /// Sets program study, faculty and enrollment year together.
    pub fn set_academic_affiliation(
        &mut self,
        program_study: Option<&str>,
        faculty: Option<&str>,
        enrollment_year: i32,
    ) -> Result<(), ProfileError> {
        validate_non_empty(program_study, "Program study")?;
        validate_non_empty(faculty, "Faculty")?;
        validate_enrollment_year(enrollment_year)?;

        self.program_study = program_study.map(str::to_owned);
        self.faculty = faculty.map(str::to_owned);
        self.enrollment_year = Some(enrollment_year);
        Ok(())
    }

    /// Sets the account credentials. Only presence is checked here; format
    /// quality is reported by [`Self::has_valid_email`] and
    /// [`Self::has_strong_password`].
    pub fn set_credentials(
        &mut self,
        email: Option<&str>,
        password: Option<&str>,
        user_name: Option<&str>,
    ) -> Result<(), ProfileError> {
        validate_non_empty(email, "Email")?;
        validate_non_empty(password, "Password")?;
        validate_non_empty(user_name, "User name")?;

        self.email = email.map(str::to_owned);
        self.password = password.map(str::to_owned);
        self.user_name = user_name.map(str::to_owned);
        Ok(())
    }

    /// Sets name, gender and student identifier number. The identifier is
    /// only required to be present; its 10-digit shape is enforced by
    /// `update_full_profile` alone.
    pub fn set_personal_info(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        gender: Option<&str>,
        student_identifier_number: Option<&str>,
    ) -> Result<(), ProfileError> {
        validate_non_empty(first_name, "First name")?;
        validate_non_empty(last_name, "Last name")?;
        validate_non_empty(gender, "Gender")?;
        validate_non_empty(student_identifier_number, "Student identifier number")?;

        self.first_name = first_name.map(str::to_owned);
        self.last_name = last_name.map(str::to_owned);
        self.gender = gender.map(str::to_owned);
        self.student_identifier_number = student_identifier_number.map(str::to_owned);
        Ok(())
    }

    /// Years elapsed between the enrollment year and the current local year.
    /// Negative when the enrollment year lies in the future.
    pub fn years_since_enrollment(&self) -> Option<i32> {
        self.years_since_enrollment_at(Local::now().year())
    }

    pub fn years_since_enrollment_at(&self, current_year: i32) -> Option<i32> {
        self.enrollment_year.map(|year| current_year.saturating_sub(year))
    }

    pub fn has_valid_email(&self) -> bool {
        is_valid_email_format(self.email())
    }

    pub fn has_strong_password(&self) -> bool {
        is_strong_password_format(self.password())
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRecord")
            .field("id", &self.id)
            .field("program_study", &self.program_study)
            .field("faculty", &self.faculty)
            .field("enrollment_year", &self.enrollment_year)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("user_name", &self.user_name)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("student_identifier_number", &self.student_identifier_number)
            .finish()
    }
}
