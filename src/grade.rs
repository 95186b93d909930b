#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crate::model::{Catalog, Roster, Submission};
use eyre::{Result, ensure};

/// Weighted grade of the named student, as a whole percentage, or `None`
/// if the student is not on the roster.
///
/// Every assignment of the catalog counts towards the total, whether the
/// student submitted it or not. Several submissions for the same assignment
/// all count. The result is rounded half to even.
pub fn compute_grade(
    name: &str,
    students: &Roster,
    assignments: &Catalog,
    submissions: &[Submission],
) -> Result<Option<i64>> {
    let Some(student) = students.id_of(name) else {
        return Ok(None);
    };
    let total_possible = assignments.total_points();
    ensure!(
        total_possible != 0,
        "cannot grade {}: the assignments are worth 0 points in total",
        name
    );
    let earned: f64 = submissions
        .iter()
        .filter(|s| s.student == student)
        .filter_map(|s| {
            assignments
                .first_with_id(s.assignment)
                .map(|a| s.percent / 100.0 * a.points as f64)
        })
        .sum();
    let grade = (earned / total_possible as f64 * 100.0).round_ties_even();
    ensure!(grade.is_finite(), "grade of {} is not a number", name);
    Ok(Some(grade as i64))
}
