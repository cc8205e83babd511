use anyhow::Result;
use campusprofile::profiles::{report_update, ProfileError, ProfileRecord, UpdateStatus};

use crate::support::profile_fixture::{
    complete_request, request_with_credentials, STRONG_PASSWORD, VALID_EMAIL, WEAK_PASSWORD,
};

#[test]
fn strong_credentials_complete_the_update() -> Result<()> {
    let mut record = ProfileRecord::new();
    let id = record.id();
    let outcome = record.update_full_profile(&complete_request())?;

    assert_eq!(outcome.status, UpdateStatus::Complete);
    assert_eq!(outcome.status.to_string(), "UPDATE COMPLETE!");
    assert!(outcome.email_valid && outcome.password_strong);
    assert_eq!(record.id(), id, "update must not replace the identifier");
    assert_eq!(record.first_name(), Some("Dewi"));
    assert_eq!(record.program_study(), Some("Informatics"));
    assert_eq!(record.enrollment_year(), Some(2021));
    assert_eq!(record.email(), Some(VALID_EMAIL));
    assert_eq!(record.password(), Some(STRONG_PASSWORD));
    assert_eq!(outcome.years_since_enrollment, record.years_since_enrollment());
    Ok(())
}

#[test]
fn each_credential_combination_has_its_message() -> Result<()> {
    let cases = [
        (VALID_EMAIL, STRONG_PASSWORD, "UPDATE COMPLETE!"),
        (VALID_EMAIL, WEAK_PASSWORD, "PLEASE USE A BETTER PASSWORD"),
        ("not-an-email", STRONG_PASSWORD, "PLEASE CHECK YOUR EMAIL"),
        (
            "not-an-email",
            WEAK_PASSWORD,
            "THIS IS A JOKE, RIGHT? PLEASE USE A VALID EMAIL AND A STRONG PASSWORD",
        ),
    ];
    for (email, password, expected) in cases {
        let mut record = ProfileRecord::new();
        let outcome = record.update_full_profile(&request_with_credentials(email, password))?;
        let mut printed = Vec::new();
        report_update(&outcome, &mut printed)?;
        assert_eq!(String::from_utf8(printed)?, format!("{expected}\n"));
    }
    Ok(())
}

#[test]
fn malformed_identifiers_fail_before_any_mutation() {
    for identifier in ["12345678", "123456789A", "12345 67890", ""] {
        let mut record = ProfileRecord::new();
        let mut request = complete_request();
        request.student_identifier_number = Some(identifier.into());
        let err = record.update_full_profile(&request).unwrap_err();
        assert_eq!(err, ProfileError::InvalidIdentifier);
        assert_eq!(err.to_string(), "Student identifier number is not valid.");
        assert!(record.program_study().is_none());
        assert!(record.email().is_none());
        assert!(record.first_name().is_none());
    }
}

#[test]
fn repeated_update_overwrites_previous_values() -> Result<()> {
    let mut record = ProfileRecord::new();
    record.update_full_profile(&complete_request())?;
    let mut request = request_with_credentials(VALID_EMAIL, WEAK_PASSWORD);
    request.faculty = Some("Industrial Engineering".into());
    let outcome = record.update_full_profile(&request)?;
    assert_eq!(outcome.status, UpdateStatus::WeakPassword);
    assert_eq!(record.faculty(), Some("Industrial Engineering"));
    assert!(!record.has_strong_password());
    Ok(())
}

#[test]
fn identifier_in_non_latin_digits_is_accepted() -> Result<()> {
    let mut record = ProfileRecord::new();
    let mut request = complete_request();
    request.student_identifier_number = Some("١٢٣٤٥٦٧٨٩٠".into());

    let outcome = record.update_full_profile(&request)?;
    assert_eq!(outcome.status, UpdateStatus::Complete);
    assert_eq!(record.student_identifier_number(), Some("١٢٣٤٥٦٧٨٩٠"));
    Ok(())
}
