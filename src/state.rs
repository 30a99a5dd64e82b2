use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::data::filter::Threshold;
use crate::data::loader::LoadReport;
use crate::data::model::{Roster, StudentRecord};
use crate::data::order::SortOrder;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything the menu acts on, independent of the console.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded roster (empty until a file is loaded).
    pub roster: Roster,

    /// File the roster came from.
    pub source: Option<PathBuf>,
}

impl AppState {
    /// Ingest a freshly loaded roster and compute its totals.
    pub fn set_report(&mut self, path: &Path, report: LoadReport) {
        let mut roster = report.roster;
        roster.calculate_totals();

        log::info!(
            "Loaded {} students for '{}' from {} ({} lines skipped)",
            roster.len(),
            roster.unit_name,
            path.display(),
            report.skipped.len()
        );

        self.roster = roster;
        self.source = Some(path.to_path_buf());
    }

    /// Unit header followed by every student in current order.
    pub fn display_all(&self) -> String {
        self.roster.to_string()
    }

    /// Students below `threshold`, without reordering the roster.
    pub fn filter_report(&self, threshold: Threshold) -> String {
        let limit = threshold.value();
        let mut out = format!("Students with total marks less than {limit}:");
        let matches = self.roster.below_threshold(limit);
        if matches.is_empty() {
            out.push_str("\nNo students found below threshold.");
        } else {
            push_lines(&mut out, matches);
        }
        out
    }

    /// Sort the roster in place and return the confirmation line.
    pub fn sort(&mut self, order: SortOrder) -> &'static str {
        match order {
            SortOrder::Ascending => {
                self.roster.sort_ascending();
                "Sorted ascending by total marks."
            }
            SortOrder::Descending => {
                self.roster.sort_descending();
                "Sorted descending by total marks."
            }
        }
    }

    /// Re-sort the roster and list its first `n` students.
    pub fn top_report(&mut self, order: SortOrder, n: usize) -> String {
        let heading = match order {
            SortOrder::Descending => "Highest",
            SortOrder::Ascending => "Lowest",
        };
        let mut out = format!("Top {n} {heading} Scoring Students:");
        push_lines(&mut out, self.roster.top(order, n));
        out
    }
}

fn push_lines<'a>(out: &mut String, students: impl IntoIterator<Item = &'a StudentRecord>) {
    for student in students {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{student}");
    }
}
