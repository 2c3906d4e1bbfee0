use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::leaderboard;
use crate::models::{Course, LeaderboardRow, StatisticsSnapshot};
use crate::tracker::Tracker;

const LEADERS_PER_COURSE: usize = 10;

#[derive(Debug, Serialize)]
pub struct CourseReport {
    pub course: Course,
    pub threshold: u64,
    pub leaders: Vec<LeaderboardRow>,
}

#[derive(Debug, Serialize)]
pub struct ProgressReport {
    pub generated_at: DateTime<Utc>,
    pub student_count: usize,
    pub statistics: StatisticsSnapshot,
    pub courses: Vec<CourseReport>,
}

pub fn collect(tracker: &Tracker, generated_at: DateTime<Utc>) -> ProgressReport {
    let students = tracker.roster().students();
    let courses = Course::ALL
        .into_iter()
        .map(|course| {
            let mut leaders = leaderboard::top_learners(course, students);
            leaders.truncate(LEADERS_PER_COURSE);
            CourseReport {
                course,
                threshold: course.threshold(),
                leaders,
            }
        })
        .collect();

    ProgressReport {
        generated_at,
        student_count: students.len(),
        statistics: tracker.statistics(),
        courses,
    }
}

pub fn build_report(report: &ProgressReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Learning Progress Report");
    let _ = writeln!(
        output,
        "Generated {} for {} enrolled students",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.student_count
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Course Statistics");

    for (label, value) in report.statistics.lines() {
        let _ = writeln!(output, "- {label}: {value}");
    }

    for section in &report.courses {
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "## {} Top Learners (completion at {} points)",
            section.course, section.threshold
        );

        if section.leaders.is_empty() {
            let _ = writeln!(output, "No learners with points in this course.");
            continue;
        }

        for row in &section.leaders {
            let _ = writeln!(
                output,
                "- {}: {} points ({:.1}% complete)",
                row.public_id, row.points, row.completion_pct
            );
        }
    }

    output
}

pub fn build_json(report: &ProgressReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_tracker() -> Tracker {
        let mut tracker = Tracker::new();
        tracker.enroll("John Smith jsmith@hotmail.com").unwrap();
        tracker.enroll("Jane Spark jspark@yahoo.com").unwrap();
        tracker.apply_points("6b86b273ff 600 10 0 0").unwrap();
        tracker.apply_points("d4735e3a26 30 0 0 0").unwrap();
        tracker
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 2, 9, 30, 0).unwrap()
    }

    #[test]
    fn markdown_lists_statistics_and_leaders() {
        let report = collect(&sample_tracker(), generated_at());
        let markdown = build_report(&report);

        assert!(markdown.starts_with(
            "# Learning Progress Report\nGenerated 2026-02-02 09:30 UTC for 2 enrolled students\n"
        ));
        assert!(markdown.contains("- Most popular: Python\n"));
        assert!(markdown.contains("- Least popular: Databases, Flask\n"));
        assert!(markdown.contains(
            "## Python Top Learners (completion at 600 points)\n\
             - 6b86b273ff: 600 points (100.0% complete)\n\
             - d4735e3a26: 30 points (5.0% complete)\n"
        ));
        assert!(markdown.contains(
            "## Flask Top Learners (completion at 550 points)\nNo learners with points in this course.\n"
        ));
    }

    #[test]
    fn json_carries_the_same_content() {
        let report = collect(&sample_tracker(), generated_at());
        let json: serde_json::Value = serde_json::from_str(&build_json(&report).unwrap()).unwrap();

        assert_eq!(json["student_count"], 2);
        assert_eq!(json["statistics"]["most_popular"], "Python");
        assert!(json["statistics"]["hardest"].is_string());
        assert_eq!(json["courses"][1]["course"], "DSA");
        assert_eq!(json["courses"][0]["leaders"][0]["public_id"], "6b86b273ff");
        assert_eq!(json["courses"][3]["leaders"].as_array().map(Vec::len), Some(0));
    }
}
