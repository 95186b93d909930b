use super::*;

/// Everything loaded at startup. Never modified afterwards: every report
/// is a read-only query over it.
#[derive(Debug, Default)]
pub struct Gradebook {
    pub students: Roster,
    pub assignments: Catalog,
    pub submissions: Vec<Submission>,
}

impl Gradebook {
    pub fn new(students: Roster, assignments: Catalog, submissions: Vec<Submission>) -> Self {
        Gradebook {
            students,
            assignments,
            submissions,
        }
    }

    pub fn assignment(&self, name: &str) -> Option<&Assignment> {
        self.assignments.get(name)
    }

    pub fn submissions_for(&self, assignment: AssignmentId) -> impl Iterator<Item = &Submission> {
        self.submissions
            .iter()
            .filter(move |s| s.assignment == assignment)
    }

    /// Every percentage recorded for the named assignment, duplicates
    /// included, or `None` if no assignment has this name.
    pub fn scores(&self, name: &str) -> Option<Vec<f64>> {
        self.assignment(name)
            .map(|a| self.submissions_for(a.id).map(|s| s.percent).collect())
    }
}
