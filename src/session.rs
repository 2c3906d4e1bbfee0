use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::leaderboard;
use crate::tracker::{describe_points, Tracker};

/// Line-oriented menu over a [`Tracker`]. Reads commands from `input` and
/// writes every prompt and result to `output`.
pub struct Session<'a, R, W> {
    tracker: &'a mut Tracker,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(tracker: &'a mut Tracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Learning Progress Tracker")?;

        while let Some(line) = self.read_line()? {
            let command = line.trim().to_lowercase();
            debug!(%command, "menu command");

            match command.as_str() {
                "exit" => {
                    writeln!(self.output, "Bye!")?;
                    break;
                }
                "add students" => self.add_students()?,
                "list" => self.list_students()?,
                "add points" => self.add_points()?,
                "find" => self.find_students()?,
                "statistics" => self.statistics()?,
                "notify" => self.notify()?,
                "back" => writeln!(self.output, "Enter 'exit' to exit the program.")?,
                "" => writeln!(self.output, "No input")?,
                _ => writeln!(self.output, "Unknown command.")?,
            }
        }

        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read command input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Reads sub-prompt lines until `back` or end of input.
    fn read_until_back(&mut self) -> anyhow::Result<Option<String>> {
        match self.read_line()? {
            Some(line) if line.trim().eq_ignore_ascii_case("back") => Ok(None),
            other => Ok(other),
        }
    }

    fn add_students(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Enter student credentials or 'back' to return:")?;
        while let Some(line) = self.read_until_back()? {
            let credentials = line.trim().to_lowercase();
            match self.tracker.enroll(&credentials) {
                Ok(_) => writeln!(self.output, "The student has been added.")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        writeln!(
            self.output,
            "Total {} students have been added.",
            self.tracker.roster().len()
        )?;
        Ok(())
    }

    fn list_students(&mut self) -> anyhow::Result<()> {
        if self.tracker.roster().is_empty() {
            writeln!(self.output, "No students found.")?;
            return Ok(());
        }

        writeln!(self.output, "Students:")?;
        for id in self.tracker.list_students() {
            writeln!(self.output, "{id}")?;
        }
        Ok(())
    }

    fn add_points(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Enter an id and points or 'back' to return:")?;
        while let Some(line) = self.read_until_back()? {
            match self.tracker.apply_points(&line) {
                Ok(()) => writeln!(self.output, "Points updated.")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn find_students(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Enter an id or 'back' to return:")?;
        while let Some(line) = self.read_until_back()? {
            match self.tracker.find_student(line.trim()) {
                Ok(student) => writeln!(self.output, "{}", describe_points(student))?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn statistics(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Type the name of a course to see details or 'back' to quit:"
        )?;
        let snapshot = self.tracker.statistics();
        for (label, value) in snapshot.lines() {
            writeln!(self.output, "{label}: {value}")?;
        }

        while let Some(line) = self.read_until_back()? {
            match self.tracker.top_learners(&line) {
                Ok((course, rows)) => {
                    write!(self.output, "{}", leaderboard::render(course, &rows))?
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn notify(&mut self) -> anyhow::Result<()> {
        let batch = self.tracker.notify();
        for message in &batch.messages {
            writeln!(self.output, "{message}")?;
        }
        writeln!(
            self.output,
            "Total {} students have been notified.",
            batch.students_notified
        )?;
        Ok(())
    }
}
