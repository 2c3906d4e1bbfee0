use std::fmt;

use thiserror::Error;

/// Credential field that failed its grammar check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    FirstName,
    LastName,
    Email,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::FirstName => f.write_str("first name"),
            CredentialField::LastName => f.write_str("last name"),
            CredentialField::Email => f.write_str("email"),
        }
    }
}

/// Rejection reasons surfaced by the tracker core. None of them are fatal and
/// a rejected operation leaves the roster untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Incorrect credentials.")]
    MalformedCredentials,

    #[error("{}", incorrect_fields(.0))]
    InvalidFields(Vec<CredentialField>),

    #[error("This email is already taken.")]
    DuplicateEmail(String),

    #[error("Incorrect points format.")]
    MalformedPoints,

    #[error("Points total would overflow for id={0}.")]
    PointsOverflow(String),

    #[error("No student is found for id={0}.")]
    StudentNotFound(String),

    #[error("Unknown course.")]
    UnknownCourse(String),
}

fn incorrect_fields(fields: &[CredentialField]) -> String {
    fields
        .iter()
        .map(|field| format!("Incorrect {field}."))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_report_every_field() {
        let err = TrackerError::InvalidFields(vec![CredentialField::FirstName, CredentialField::Email]);
        assert_eq!(err.to_string(), "Incorrect first name.\nIncorrect email.");
    }

    #[test]
    fn not_found_names_the_id() {
        let err = TrackerError::StudentNotFound("6b86b273ff".to_string());
        assert_eq!(err.to_string(), "No student is found for id=6b86b273ff.");
    }
}
