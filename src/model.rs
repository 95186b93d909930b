pub use self::assignment::{Assignment, AssignmentId, Catalog};
pub use self::gradebook::Gradebook;
pub use self::student::{Roster, StudentId};
pub use self::submission::Submission;

mod assignment;
mod gradebook;
mod student;
mod submission;
