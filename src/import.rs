use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use crate::tracker::Tracker;

#[derive(Debug, Deserialize)]
struct CsvRow {
    first_name: String,
    last_name: String,
    email: String,
}

pub fn import_csv(tracker: &mut Tracker, csv_path: &Path) -> anyhow::Result<usize> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    import_reader(tracker, file)
}

/// Enrolls every row through the normal credential checks. Rejected rows are
/// logged and skipped; the count of enrolled rows is returned.
pub fn import_reader<R: Read>(tracker: &mut Tracker, reader: R) -> anyhow::Result<usize> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut inserted = 0usize;

    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("malformed csv row {}", line + 1))?;
        let credentials = format!("{} {} {}", row.first_name, row.last_name, row.email);

        match tracker.enroll(&credentials) {
            Ok(_) => inserted += 1,
            Err(err) => warn!(row = line + 1, email = %row.email, %err, "skipping csv row"),
        }
    }

    info!(inserted, "csv import finished");
    Ok(inserted)
}
