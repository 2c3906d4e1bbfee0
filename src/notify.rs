use std::collections::{BTreeSet, HashSet};

use tracing::info;

use crate::models::{Course, Notification, Student};

/// Result of one notification pass.
#[derive(Debug, Default)]
pub struct NotificationBatch {
    pub messages: Vec<Notification>,
    pub students_notified: usize,
}

/// Remembers which students were already told about each completed course.
#[derive(Debug, Default)]
pub struct NotificationEngine {
    notified: [BTreeSet<String>; 4],
}

impl NotificationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, students: &[Student]) -> NotificationBatch {
        let mut batch = NotificationBatch::default();
        let mut recipients = HashSet::new();

        for student in students {
            for course in Course::ALL {
                if !student.has_completed(course)
                    || self.notified[course.index()].contains(&student.public_id)
                {
                    continue;
                }

                info!(public_id = %student.public_id, course = %course, "completion notification");
                batch.messages.push(Notification {
                    email: student.email.clone(),
                    full_name: student.full_name(),
                    course,
                });
                self.notified[course.index()].insert(student.public_id.clone());
                recipients.insert(student.public_id.as_str());
            }
        }

        batch.students_notified = recipients.len();
        batch
    }

    #[cfg(test)]
    pub fn notified_for(&self, course: Course) -> &BTreeSet<String> {
        &self.notified[course.index()]
    }
}
