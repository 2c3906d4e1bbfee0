use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{Course, Student};
use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointUpdate {
    pub public_id: String,
    pub points: [u64; 4],
}

/// `<id> <p1> <p2> <p3> <p4>`, one value per course in declaration order.
pub fn parse_points(raw: &str) -> Result<PointUpdate> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [id, values @ ..] = tokens.as_slice() else {
        return Err(TrackerError::MalformedPoints);
    };

    if values.len() != Course::ALL.len()
        || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(TrackerError::MalformedPoints);
    }

    let mut points = [0u64; 4];
    for (slot, value) in points.iter_mut().zip(values) {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(TrackerError::MalformedPoints);
        }
        *slot = value.parse().map_err(|_| TrackerError::MalformedPoints)?;
    }

    Ok(PointUpdate {
        public_id: id.to_string(),
        points,
    })
}

/// Zero contributions leave both points and submissions alone. An update that
/// would overflow any course total is rejected without touching the student.
pub fn credit(student: &mut Student, points: [u64; 4]) -> Result<()> {
    let mut totals = student.course_points;
    for (course, value) in Course::ALL.into_iter().zip(points) {
        totals[course] = totals[course]
            .checked_add(value)
            .ok_or_else(|| TrackerError::PointsOverflow(student.public_id.clone()))?;
    }

    for (course, value) in Course::ALL.into_iter().zip(points) {
        if value > 0 {
            let submissions = &mut student.course_submissions[course];
            *submissions = submissions.saturating_add(1);
        }
    }
    student.course_points = totals;
    Ok(())
}

pub fn apply_points(roster: &mut Roster, raw: &str) -> Result<()> {
    let update = parse_points(raw)?;
    let student = roster.find_by_id_mut(&update.public_id)?;
    credit(student, update.points)?;
    debug!(public_id = %update.public_id, points = ?update.points, "points applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseTally;

    #[test]
    fn accepts_well_formed_lines() {
        let valid = [
            "1 5 5 5 5",
            "1000 25 5 3 74",
            "9999999 99999999 9999999 9999999 9999999",
            "0 0 0 0 0",
            "d4735e3a26 4 11 0 7",
            "id 1 2 3 4",
        ];

        for line in valid {
            assert!(parse_points(line).is_ok(), "expected '{line}' to parse");
        }

        let update = parse_points("1000 25 5 3 74").unwrap();
        assert_eq!(update.public_id, "1000");
        assert_eq!(update.points, [25, 5, 3, 74]);
    }

    #[test]
    fn rejects_malformed_lines() {
        let invalid = [
            "",
            "-1 1 1 1",
            "1 1 2 A",
            "1 1 1",
            "-1 -1 -1 -1",
            "1010 -12 5 6 8",
            "2.5 2.5 2.4 1.8",
            "id 1 2 3 4 5",
            "id 1 2 3 99999999999999999999999",
        ];

        for line in invalid {
            assert_eq!(
                parse_points(line).unwrap_err(),
                TrackerError::MalformedPoints,
                "expected '{line}' to be rejected"
            );
        }
    }

    #[test]
    fn points_accumulate_per_student() {
        let mut roster = Roster::new();
        roster.enroll("John Smith jsmith@hotmail.com").unwrap();
        roster.enroll("Robert Jemison Van de Graaff robertvdgraaff@mit.edu").unwrap();

        apply_points(&mut roster, "6b86b273ff 0 0 0 0").unwrap();
        apply_points(&mut roster, "d4735e3a26 4 11 0 1").unwrap();
        apply_points(&mut roster, "6b86b273ff 0 0 0 5").unwrap();

        let first = roster.find_by_id("6b86b273ff").unwrap();
        let second = roster.find_by_id("d4735e3a26").unwrap();
        assert_eq!(first.course_points, CourseTally::from([0, 0, 0, 5]));
        assert_eq!(second.course_points, CourseTally::from([4, 11, 0, 1]));
        assert_eq!(second.course_submissions, CourseTally::from([1, 1, 0, 1]));
    }

    #[test]
    fn all_zero_update_is_a_no_op() {
        let mut roster = Roster::new();
        roster.enroll("John Smith jsmith@hotmail.com").unwrap();
        apply_points(&mut roster, "6b86b273ff 0 0 0 0").unwrap();

        let student = roster.find_by_id("6b86b273ff").unwrap();
        assert_eq!(student.course_points, CourseTally::default());
        assert_eq!(student.course_submissions, CourseTally::default());
    }

    #[test]
    fn overflowing_update_is_rejected_whole() {
        let mut roster = Roster::new();
        roster.enroll("John Smith jsmith@hotmail.com").unwrap();
        apply_points(&mut roster, "6b86b273ff 18446744073709551615 0 0 0").unwrap();

        assert_eq!(
            apply_points(&mut roster, "6b86b273ff 1 0 0 3").unwrap_err(),
            TrackerError::PointsOverflow("6b86b273ff".to_string())
        );

        let student = roster.find_by_id("6b86b273ff").unwrap();
        assert_eq!(student.course_points, CourseTally::from([u64::MAX, 0, 0, 0]));
        assert_eq!(student.course_submissions, CourseTally::from([1, 0, 0, 0]));
    }

    #[test]
    fn unknown_student_is_reported() {
        let mut roster = Roster::new();
        assert_eq!(
            apply_points(&mut roster, "abc 1 2 3 4").unwrap_err(),
            TrackerError::StudentNotFound("abc".to_string())
        );
    }
}
