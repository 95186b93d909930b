use super::{AssignmentId, StudentId};

/// One score, in percent, obtained by a student on an assignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    pub assignment: AssignmentId,
    pub student: StudentId,
    pub percent: f64,
}

impl Submission {
    pub fn new(assignment: AssignmentId, student: StudentId, percent: f64) -> Self {
        Self {
            assignment,
            student,
            percent,
        }
    }
}
