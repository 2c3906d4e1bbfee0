use tracing::{debug, info};

use crate::error::{CredentialField, Result, TrackerError};
use crate::identity::{hash_id, IdentityAllocator};
use crate::models::{CourseTally, Student};
use crate::validation::{title_case, validate_email, validate_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// First token is the first name, last token the email, everything in between
/// is the last name joined by single spaces.
pub fn parse_credentials(raw: &str) -> Option<Credentials> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    Some(Credentials {
        first_name: parts[0].to_string(),
        last_name: parts[1..parts.len() - 1].join(" "),
        email: parts[parts.len() - 1].to_string(),
    })
}

#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    ids: IdentityAllocator,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every credential field before rejecting, so the caller sees
    /// all bad fields at once. Uniqueness is checked once the email is valid.
    pub fn enroll(&mut self, raw: &str) -> Result<&Student> {
        let credentials = parse_credentials(raw).ok_or(TrackerError::MalformedCredentials)?;

        let mut invalid = Vec::new();
        if !validate_name(&credentials.first_name) {
            invalid.push(CredentialField::FirstName);
        }
        if !validate_name(&credentials.last_name) {
            invalid.push(CredentialField::LastName);
        }
        if !validate_email(&credentials.email) {
            invalid.push(CredentialField::Email);
        }
        if !invalid.is_empty() {
            debug!(?invalid, "credentials rejected");
            return Err(TrackerError::InvalidFields(invalid));
        }

        let email = credentials.email.to_lowercase();
        if !self.is_email_unique(&email) {
            debug!(%email, "duplicate email rejected");
            return Err(TrackerError::DuplicateEmail(email));
        }

        let public_id = hash_id(self.ids.next_id());
        info!(%public_id, %email, "student enrolled");
        self.students.push(Student {
            public_id,
            first_name: title_case(&credentials.first_name),
            last_name: title_case(&credentials.last_name),
            email,
            course_points: CourseTally::default(),
            course_submissions: CourseTally::default(),
        });

        let index = self.students.len() - 1;
        Ok(&self.students[index])
    }

    pub fn is_email_unique(&self, email: &str) -> bool {
        !self
            .students
            .iter()
            .any(|student| student.email.eq_ignore_ascii_case(email))
    }

    pub fn find_by_id(&self, public_id: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|student| student.public_id == public_id)
            .ok_or_else(|| TrackerError::StudentNotFound(public_id.to_string()))
    }

    pub(crate) fn find_by_id_mut(&mut self, public_id: &str) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|student| student.public_id == public_id)
            .ok_or_else(|| TrackerError::StudentNotFound(public_id.to_string()))
    }

    /// Public ids in enrollment order.
    pub fn list_ids(&self) -> Vec<&str> {
        self.students
            .iter()
            .map(|student| student.public_id.as_str())
            .collect()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_last_names() {
        let credentials = parse_credentials("Robert Jemison Van de Graaff robertvdgraaff@mit.edu")
            .expect("credentials should parse");
        assert_eq!(credentials.first_name, "Robert");
        assert_eq!(credentials.last_name, "Jemison Van de Graaff");
        assert_eq!(credentials.email, "robertvdgraaff@mit.edu");
    }

    #[test]
    fn too_few_tokens_are_malformed() {
        assert_eq!(parse_credentials("John jsmith@hotmail.com"), None);
        assert_eq!(parse_credentials(""), None);
        assert_eq!(parse_credentials("   "), None);

        let mut roster = Roster::new();
        assert_eq!(
            roster.enroll("John").unwrap_err(),
            TrackerError::MalformedCredentials
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn enrollment_normalizes_names_and_email() {
        let mut roster = Roster::new();
        let student = roster
            .enroll("jean-claude o'connor JCDA123@GOOGLE.NET")
            .expect("enrollment should succeed");

        assert_eq!(student.public_id, "6b86b273ff");
        assert_eq!(student.full_name(), "Jean-Claude O'Connor");
        assert_eq!(student.email, "jcda123@google.net");
        assert_eq!(student.course_points, CourseTally::default());
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let mut roster = Roster::new();
        roster.enroll("John Doe johnd@yahoo.com").unwrap();
        roster.enroll("Jane Spark jspark@gmail.com").unwrap();

        let err = roster.enroll("Jim Spark JSPARK@gmail.com").unwrap_err();
        assert_eq!(err, TrackerError::DuplicateEmail("jspark@gmail.com".to_string()));
        assert_eq!(roster.len(), 2);
        assert!(roster.is_email_unique("foo@gmail.com"));
    }

    #[test]
    fn all_invalid_fields_are_reported() {
        let mut roster = Roster::new();
        let err = roster.enroll("-name O''Neill email@emailxyz").unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidFields(vec![
                CredentialField::FirstName,
                CredentialField::LastName,
                CredentialField::Email,
            ])
        );
    }

    #[test]
    fn only_valid_credentials_are_admitted() {
        let mut roster = Roster::new();
        let lines = [
            "John Smith jsmith@hotmail.com",
            "-name surname email@email.xyz",
            "Stanisław Oğuz 1@1.1",
            "Robert Jemison Van de Graaff robertvdgraaff@mit.edu",
            "陳 港 生",
            "",
            " ",
        ];

        for line in lines {
            let _ = roster.enroll(line);
        }

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.list_ids(), vec!["6b86b273ff", "d4735e3a26"]);
    }

    #[test]
    fn failed_enrollment_does_not_advance_ids() {
        let mut roster = Roster::new();
        let _ = roster.enroll("J. Smith js@mail.com");
        let student = roster.enroll("John Smith js@mail.com").unwrap();
        assert_eq!(student.public_id, "6b86b273ff");
    }

    #[test]
    fn unknown_ids_are_reported() {
        let roster = Roster::new();
        assert_eq!(
            roster.find_by_id("6b86b273ff").unwrap_err(),
            TrackerError::StudentNotFound("6b86b273ff".to_string())
        );
    }
}
