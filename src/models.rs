use std::fmt;
use std::ops::{Index, IndexMut};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Course {
    Python,
    #[serde(rename = "DSA")]
    Dsa,
    Databases,
    Flask,
}

impl Course {
    /// Declaration order. Point tokens and statistics tie-breaks follow it.
    pub const ALL: [Course; 4] = [Course::Python, Course::Dsa, Course::Databases, Course::Flask];

    pub fn name(self) -> &'static str {
        match self {
            Course::Python => "Python",
            Course::Dsa => "DSA",
            Course::Databases => "Databases",
            Course::Flask => "Flask",
        }
    }

    /// Points required to complete the course.
    pub fn threshold(self) -> u64 {
        match self {
            Course::Python => 600,
            Course::Dsa => 400,
            Course::Databases => 480,
            Course::Flask => 550,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(value: &str) -> Option<Course> {
        let value = value.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One counter per course, indexed by [`Course`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseTally([u64; 4]);

impl CourseTally {
    pub fn iter(&self) -> impl Iterator<Item = (Course, u64)> + '_ {
        Course::ALL.into_iter().map(move |course| (course, self[course]))
    }
}

impl From<[u64; 4]> for CourseTally {
    fn from(values: [u64; 4]) -> Self {
        CourseTally(values)
    }
}

impl Index<Course> for CourseTally {
    type Output = u64;

    fn index(&self, course: Course) -> &u64 {
        &self.0[course.index()]
    }
}

impl IndexMut<Course> for CourseTally {
    fn index_mut(&mut self, course: Course) -> &mut u64 {
        &mut self.0[course.index()]
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    pub public_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub course_points: CourseTally,
    pub course_submissions: CourseTally,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_completed(&self, course: Course) -> bool {
        self.course_points[course] >= course.threshold()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub most_popular: Option<String>,
    pub least_popular: Option<String>,
    pub highest_activity: Option<String>,
    pub lowest_activity: Option<String>,
    pub easiest: Option<String>,
    pub hardest: Option<String>,
}

impl StatisticsSnapshot {
    /// Labelled slots in display order, `n/a` for unavailable ones.
    pub fn lines(&self) -> [(&'static str, &str); 6] {
        fn slot(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("n/a")
        }

        [
            ("Most popular", slot(&self.most_popular)),
            ("Least popular", slot(&self.least_popular)),
            ("Highest activity", slot(&self.highest_activity)),
            ("Lowest activity", slot(&self.lowest_activity)),
            ("Easiest course", slot(&self.easiest)),
            ("Hardest course", slot(&self.hardest)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub public_id: String,
    pub points: u64,
    pub completion_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub email: String,
    pub full_name: String,
    pub course: Course,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To: {}", self.email)?;
        writeln!(f, "Re: Your Learning Progress")?;
        write!(
            f,
            "Hello, {}! You have accomplished our {} course!",
            self.full_name, self.course
        )
    }
}
