use super::model::ProfileRecord;

const PASSWORD_MASK: &str = "********";

#[derive(Debug, Clone, Default)]
pub struct ProfileSummary {
    pub highlights: Vec<String>,
    pub fields: Vec<(String, String)>,
}

impl ProfileSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders highlights followed by `Label: value` rows.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = self.highlights.iter().map(|h| format!("- {h}")).collect();
        lines.extend(
            self.fields
                .iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
        lines.join("\n")
    }
}

pub fn summarize_profile(profile: &ProfileRecord) -> ProfileSummary {
    let mut summary = ProfileSummary::new();
    match (profile.first_name(), profile.last_name()) {
        (Some(first), Some(last)) => summary.highlights.push(format!("Member: {first} {last}")),
        _ => summary
            .highlights
            .push("No personal information recorded yet.".into()),
    }
    let years = profile.years_since_enrollment();
    if let (Some(program), Some(years)) = (profile.program_study(), years) {
        summary
            .highlights
            .push(format!("{program}, {years} year(s) since enrollment"));
    }
    if profile.email().is_some() {
        summary.highlights.push(format!(
            "Email {}, password {}",
            if profile.has_valid_email() { "valid" } else { "invalid" },
            if profile.has_strong_password() { "strong" } else { "weak" },
        ));
    }

    summary.fields.push(("ID".into(), profile.id().to_string()));
    summary
        .fields
        .push(("First Name".into(), unset_or(profile.first_name())));
    summary
        .fields
        .push(("Last Name".into(), unset_or(profile.last_name())));
    summary.fields.push(("Gender".into(), unset_or(profile.gender())));
    summary.fields.push((
        "Student Identifier Number".into(),
        unset_or(profile.student_identifier_number()),
    ));
    summary
        .fields
        .push(("Program Study".into(), unset_or(profile.program_study())));
    summary.fields.push(("Faculty".into(), unset_or(profile.faculty())));
    summary.fields.push((
        "Enrollment Year".into(),
        profile
            .enrollment_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| "Unset".into()),
    ));
    summary.fields.push(("Email".into(), unset_or(profile.email())));
    summary.fields.push((
        "Password".into(),
        profile
            .password()
            .map(|_| PASSWORD_MASK.to_string())
            .unwrap_or_else(|| "Unset".into()),
    ));
    summary
        .fields
        .push(("User Name".into(), unset_or(profile.user_name())));
    summary
}

fn unset_or(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "Unset".into(),
    }
}
