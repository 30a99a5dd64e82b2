use std::cmp::Reverse;

use super::model::{Roster, StudentRecord};

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort students by total in place. The sort is stable, so equal totals keep
/// their relative order.
pub fn sort_by_total(students: &mut [StudentRecord], order: SortOrder) {
    match order {
        SortOrder::Ascending => students.sort_by_key(StudentRecord::sort_key),
        SortOrder::Descending => students.sort_by_key(|s| Reverse(s.sort_key())),
    }
}

// ---------------------------------------------------------------------------
// Roster ordering and top-N views
// ---------------------------------------------------------------------------

impl Roster {
    pub fn sort_ascending(&mut self) {
        sort_by_total(&mut self.students, SortOrder::Ascending);
    }

    pub fn sort_descending(&mut self) {
        sort_by_total(&mut self.students, SortOrder::Descending);
    }

    /// Re-sort the roster in `order` and return its first `n` students
    /// (fewer when the roster is smaller). The roster stays re-sorted.
    pub fn top(&mut self, order: SortOrder, n: usize) -> &[StudentRecord] {
        sort_by_total(&mut self.students, order);
        let limit = n.min(self.students.len());
        &self.students[..limit]
    }

    /// The `n` highest totals, best first.
    pub fn top_highest(&mut self, n: usize) -> &[StudentRecord] {
        self.top(SortOrder::Descending, n)
    }

    /// The `n` lowest totals, worst first.
    pub fn top_lowest(&mut self, n: usize) -> &[StudentRecord] {
        self.top(SortOrder::Ascending, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(marks: &[(&str, [i32; 3])]) -> Roster {
        let mut roster = Roster::new("Unit");
        for (i, (name, m)) in marks.iter().enumerate() {
            roster
                .students
                .push(StudentRecord::new(*name, i.to_string(), *m));
        }
        roster.calculate_totals();
        roster
    }

    fn totals(roster: &Roster) -> Vec<i64> {
        roster.students.iter().map(StudentRecord::sort_key).collect()
    }

    fn names(students: &[StudentRecord]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn ascending_orders_by_total() {
        let mut r = roster(&[("A", [30, 30, 30]), ("B", [10, 10, 10]), ("C", [20, 20, 20])]);
        r.sort_ascending();
        assert_eq!(names(&r.students), ["B", "C", "A"]);
    }

    #[test]
    fn descending_reverses_ascending_totals() {
        let mut r = roster(&[
            ("A", [5, 5, 5]),
            ("B", [70, 80, 90]),
            ("C", [40, 40, 40]),
            ("D", [100, 0, 1]),
        ]);
        r.sort_ascending();
        let mut asc = totals(&r);
        r.sort_descending();
        asc.reverse();
        assert_eq!(totals(&r), asc);
    }

    #[test]
    fn sort_keeps_equal_totals_in_place() {
        let mut r = roster(&[("A", [10, 0, 0]), ("B", [0, 10, 0]), ("C", [0, 0, 5])]);
        r.sort_descending();
        assert_eq!(names(&r.students), ["A", "B", "C"]);
    }

    #[test]
    fn top_highest_takes_five_and_mutates_order() {
        let mut r = roster(&[
            ("A", [1, 1, 1]),
            ("B", [2, 2, 2]),
            ("C", [3, 3, 3]),
            ("D", [4, 4, 4]),
            ("E", [5, 5, 5]),
            ("F", [6, 6, 6]),
        ]);
        assert_eq!(names(r.top_highest(5)), ["F", "E", "D", "C", "B"]);
        assert_eq!(r.students[5].name, "A");
    }

    #[test]
    fn top_lowest_with_small_roster_returns_all() {
        let mut r = roster(&[("A", [9, 9, 9]), ("B", [1, 1, 1])]);
        assert_eq!(names(r.top_lowest(5)), ["B", "A"]);
    }

    #[test]
    fn top_of_empty_roster_is_empty() {
        let mut r = Roster::default();
        assert!(r.top_highest(5).is_empty());
    }
}
