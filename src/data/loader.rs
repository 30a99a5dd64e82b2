use std::convert::Infallible;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Roster, StudentRecord};

/// name, id, mark1, mark2, mark3
pub const FIELDS_PER_RECORD: usize = 5;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A failure that aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed reading {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// A data line that was skipped. Displayed the way the console reports it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("Invalid line: {text}")]
    FieldCount {
        line: usize,
        found: usize,
        text: String,
    },

    #[error("Invalid marks: {text}")]
    InvalidMarks { line: usize, text: String },
}

impl LineError {
    /// 1-based line number in the source file.
    pub fn line(&self) -> usize {
        match self {
            LineError::FieldCount { line, .. } | LineError::InvalidMarks { line, .. } => *line,
        }
    }
}

/// Outcome of a load that got through the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub roster: Roster,
    /// Lines dropped for having the wrong shape, in file order.
    pub skipped: Vec<LineError>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a marks file.
///
/// Layout:
/// ```text
/// # comments and blank lines are ignored
/// Programming 101            <- unit name
/// Alice,S001,50,60,70        <- name,id,mark1,mark2,mark3
/// ```
///
/// Opening or reading the file is fatal; malformed data lines are only
/// collected in [`LoadReport::skipped`].
pub fn load_file(path: &Path) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse marks data from any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the load; only genuine I/O errors are returned.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<LoadReport> {
    parse_lines(
        reader
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())),
    )
}

/// Parse marks data already held in memory.
pub fn parse_str(text: &str) -> LoadReport {
    match parse_lines(text.lines().map(Ok::<_, Infallible>)) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

// ---------------------------------------------------------------------------
// Line handling
// ---------------------------------------------------------------------------

fn parse_lines<I, S, E>(lines: I) -> Result<LoadReport, E>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.as_ref().trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if report.roster.unit_name.is_empty() {
            report.roster.unit_name = line.to_string();
            continue;
        }

        match parse_record(line, idx + 1) {
            Ok(student) => report.roster.students.push(student),
            Err(err) => {
                log::warn!("line {}: {err}", err.line());
                report.skipped.push(err);
            }
        }
    }

    Ok(report)
}

/// Split one data line on plain commas (no quoting, trailing empty fields
/// dropped), then deserialize the five fields positionally.
fn parse_record(line: &str, line_no: usize) -> Result<StudentRecord, LineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(line.as_bytes());

    let mut record = match reader.records().next() {
        Some(Ok(record)) => record,
        _ => {
            return Err(LineError::FieldCount {
                line: line_no,
                found: 0,
                text: line.to_string(),
            })
        }
    };

    // Trailing empty fields do not count, so `a,b,1,2,3,` is still five.
    let kept = (0..record.len())
        .rev()
        .find(|&i| !record[i].is_empty())
        .map_or(0, |i| i + 1);
    record.truncate(kept);

    if record.len() != FIELDS_PER_RECORD {
        return Err(LineError::FieldCount {
            line: line_no,
            found: record.len(),
            text: line.to_string(),
        });
    }

    record.trim();
    record
        .deserialize::<StudentRecord>(None)
        .map_err(|_| LineError::InvalidMarks {
            line: line_no,
            text: line.to_string(),
        })
}
