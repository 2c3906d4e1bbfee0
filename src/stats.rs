use crate::models::{Course, StatisticsSnapshot, Student};

/// Roster-wide aggregates for a single course.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CourseMetrics {
    pub enrollment: u64,
    pub submissions: u64,
    pub total_points: u128,
}

impl CourseMetrics {
    pub fn average(&self) -> f64 {
        if self.submissions == 0 {
            0.0
        } else {
            self.total_points as f64 / self.submissions as f64
        }
    }
}

pub fn course_metrics(students: &[Student]) -> [CourseMetrics; 4] {
    let mut metrics = [CourseMetrics::default(); 4];

    for student in students {
        for course in Course::ALL {
            let entry = &mut metrics[course.index()];
            let points = student.course_points[course];
            if points > 0 {
                entry.enrollment += 1;
                entry.total_points += u128::from(points);
            }
            entry.submissions = entry
                .submissions
                .saturating_add(student.course_submissions[course]);
        }
    }

    metrics
}

/// Recomputed from scratch on every call.
pub fn compute(students: &[Student]) -> StatisticsSnapshot {
    let metrics = course_metrics(students);
    let mut snapshot = StatisticsSnapshot::default();

    if metrics.iter().all(|m| m.enrollment == 0) {
        return snapshot;
    }

    let enrollment = metrics.map(|m| m.enrollment as f64);
    let submissions = metrics.map(|m| m.submissions as f64);
    let averages = metrics.map(|m| m.average());

    (snapshot.most_popular, snapshot.least_popular) = extremes(&enrollment);
    (snapshot.highest_activity, snapshot.lowest_activity) = extremes(&submissions);
    (snapshot.easiest, snapshot.hardest) = extremes(&averages);

    snapshot
}

/// Courses tied at the maximum and, when it differs from the maximum, the
/// courses tied at the minimum.
fn extremes(values: &[f64; 4]) -> (Option<String>, Option<String>) {
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);

    let high = Some(courses_at(values, max));
    let low = (max != min).then(|| courses_at(values, min));
    (high, low)
}

fn courses_at(values: &[f64; 4], target: f64) -> String {
    Course::ALL
        .into_iter()
        .filter(|course| values[course.index()] == target)
        .map(Course::name)
        .collect::<Vec<_>>()
        .join(", ")
}
