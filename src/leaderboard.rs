use std::fmt::Write;

use crate::models::{Course, LeaderboardRow, Student};

/// Share of the completion threshold reached, one decimal with halves to even,
/// capped at 100.
pub fn completion_pct(course: Course, points: u64) -> f64 {
    let pct = points as f64 / course.threshold() as f64 * 100.0;
    ((pct * 10.0).round_ties_even() / 10.0).min(100.0)
}

/// Students with points in `course`, highest first; equal points fall back to
/// ascending public id.
pub fn top_learners(course: Course, students: &[Student]) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = students
        .iter()
        .filter(|student| student.course_points[course] > 0)
        .map(|student| {
            let points = student.course_points[course];
            LeaderboardRow {
                public_id: student.public_id.clone(),
                points,
                completion_pct: completion_pct(course, points),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.public_id.cmp(&b.public_id))
    });
    rows
}

pub fn render(course: Course, rows: &[LeaderboardRow]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", course.name());
    let _ = writeln!(output, "{:<12} {:<10} {:9}", "id", "points", "completed");
    for row in rows {
        let _ = writeln!(
            output,
            "{:<12} {:<10} {:.1}%",
            row.public_id, row.points, row.completion_pct
        );
    }
    output
}
