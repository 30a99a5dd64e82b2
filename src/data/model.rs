use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// StudentRecord – one data line of the marks file
// ---------------------------------------------------------------------------

/// A single student with three marks and the derived total.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub id: String,
    pub mark1: i32,
    pub mark2: i32,
    pub mark3: i32,
    /// Sum of the three marks – `None` until [`StudentRecord::calculate_total`] runs.
    #[serde(skip_deserializing)]
    pub total: Option<i64>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>, marks: [i32; 3]) -> Self {
        let [mark1, mark2, mark3] = marks;
        Self {
            name: name.into(),
            id: id.into(),
            mark1,
            mark2,
            mark3,
            total: None,
        }
    }

    /// Recompute `total` from the marks. Widened to `i64` so it cannot overflow.
    pub fn calculate_total(&mut self) {
        self.total = Some(i64::from(self.mark1) + i64::from(self.mark2) + i64::from(self.mark3));
    }

    /// Total used for ordering; an uncomputed total sorts as zero.
    pub fn sort_key(&self) -> i64 {
        self.total.unwrap_or_default()
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, ID: {}, Marks: {}, {}, {}, Total: {}",
            self.name,
            self.id,
            self.mark1,
            self.mark2,
            self.mark3,
            self.total.unwrap_or_default()
        )
    }
}

// ---------------------------------------------------------------------------
// Roster – the complete loaded unit
// ---------------------------------------------------------------------------

/// All students of one unit, in their current display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Label taken from the first meaningful line of the file.
    pub unit_name: String,
    pub students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new(unit_name: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
            students: Vec::new(),
        }
    }

    /// Compute every student's total. Safe to call repeatedly.
    pub fn calculate_totals(&mut self) {
        for student in &mut self.students {
            student.calculate_total();
        }
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster has no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// `Unit: <name>` followed by one line per student.
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit: {}", self.unit_name)?;
        for student in &self.students {
            write!(f, "\n{student}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let mut roster = Roster::new("Unit1");
        roster.students.push(StudentRecord::new("Alice", "1", [50, 60, 70]));
        roster.students.push(StudentRecord::new("Bob", "2", [90, 90, 90]));
        roster
    }

    #[test]
    fn totals_start_unset() {
        let roster = roster();
        assert!(roster.students.iter().all(|s| s.total.is_none()));
    }

    #[test]
    fn calculate_totals_sums_marks() {
        let mut roster = roster();
        roster.calculate_totals();
        assert_eq!(roster.students[0].total, Some(180));
        assert_eq!(roster.students[1].total, Some(270));
        for s in &roster.students {
            let sum = i64::from(s.mark1) + i64::from(s.mark2) + i64::from(s.mark3);
            assert_eq!(s.total, Some(sum));
        }
    }

    #[test]
    fn calculate_totals_is_idempotent() {
        let mut roster = roster();
        roster.calculate_totals();
        let first = roster.clone();
        roster.calculate_totals();
        assert_eq!(roster, first);
    }

    #[test]
    fn total_does_not_overflow() {
        let mut s = StudentRecord::new("Max", "9", [i32::MAX, i32::MAX, i32::MAX]);
        s.calculate_total();
        assert_eq!(s.total, Some(3 * i64::from(i32::MAX)));
    }

    #[test]
    fn display_lists_unit_then_students() {
        let mut roster = roster();
        roster.calculate_totals();
        assert_eq!(
            roster.to_string(),
            "Unit: Unit1\n\
             Name: Alice, ID: 1, Marks: 50, 60, 70, Total: 180\n\
             Name: Bob, ID: 2, Marks: 90, 90, 90, Total: 270"
        );
    }

    #[test]
    fn uncomputed_total_displays_as_zero() {
        let s = StudentRecord::new("Carol", "3", [1, 2, 3]);
        assert!(s.to_string().ends_with("Total: 0"));
    }
}
