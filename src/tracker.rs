use crate::error::{Result, TrackerError};
use crate::ledger;
use crate::leaderboard;
use crate::models::{Course, LeaderboardRow, StatisticsSnapshot, Student};
use crate::notify::{NotificationBatch, NotificationEngine};
use crate::roster::Roster;
use crate::stats;

/// Owns all process-local state and exposes the operations the command
/// interface calls into.
#[derive(Debug)]
pub struct Tracker {
    roster: Roster,
    notifications: NotificationEngine,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            notifications: NotificationEngine::new(),
        }
    }

    pub fn enroll(&mut self, credentials: &str) -> Result<&Student> {
        self.roster.enroll(credentials)
    }

    pub fn apply_points(&mut self, line: &str) -> Result<()> {
        ledger::apply_points(&mut self.roster, line)
    }

    pub fn find_student(&self, public_id: &str) -> Result<&Student> {
        self.roster.find_by_id(public_id)
    }

    pub fn list_students(&self) -> Vec<&str> {
        self.roster.list_ids()
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        stats::compute(self.roster.students())
    }

    pub fn top_learners(&self, course_name: &str) -> Result<(Course, Vec<LeaderboardRow>)> {
        let course = Course::parse(course_name)
            .ok_or_else(|| TrackerError::UnknownCourse(course_name.to_string()))?;
        Ok((course, leaderboard::top_learners(course, self.roster.students())))
    }

    pub fn notify(&mut self) -> NotificationBatch {
        self.notifications.notify(self.roster.students())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

/// `<id> points: Python=<n>; DSA=<n>; Databases=<n>; Flask=<n>.`
pub fn describe_points(student: &Student) -> String {
    let points = student
        .course_points
        .iter()
        .map(|(course, value)| format!("{}={}", course.name(), value))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} points: {}.", student.public_id, points)
}
