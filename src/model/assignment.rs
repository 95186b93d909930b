use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AssignmentId(pub i64);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub id: AssignmentId,
    pub name: String,
    pub points: i64,
}

impl Assignment {
    pub fn new(id: AssignmentId, name: impl Into<String>, points: i64) -> Self {
        Self {
            id,
            name: name.into(),
            points,
        }
    }
}

/// Assignments indexed by name, iterated in first-insertion order.
///
/// Inserting an assignment whose name is already known replaces the
/// previous one in place, so it keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    assignments: Vec<Assignment>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, assignment: Assignment) -> Option<Assignment> {
        if let Some(&idx) = self.index.get(&assignment.name) {
            Some(std::mem::replace(&mut self.assignments[idx], assignment))
        } else {
            self.index
                .insert(assignment.name.clone(), self.assignments.len());
            self.assignments.push(assignment);
            None
        }
    }

    pub fn get(&self, name: &str) -> Option<&Assignment> {
        self.index.get(name).map(|&idx| &self.assignments[idx])
    }

    /// First assignment carrying this id, several names may share one.
    pub fn first_with_id(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn total_points(&self) -> i64 {
        self.assignments.iter().map(|a| a.points).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<Assignment> for Catalog {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for assignment in iter {
            catalog.insert(assignment);
        }
        catalog
    }
}

#[test]
fn test_duplicate_name_keeps_position() {
    let catalog = [
        Assignment::new(AssignmentId(1), "HW1", 10),
        Assignment::new(AssignmentId(2), "HW2", 20),
        Assignment::new(AssignmentId(3), "HW1", 30),
    ]
    .into_iter()
    .collect::<Catalog>();
    assert_eq!(catalog.len(), 2);
    let names = catalog.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["HW1", "HW2"]);
    assert_eq!(catalog.get("HW1").map(|a| a.id), Some(AssignmentId(3)));
    assert_eq!(catalog.total_points(), 50);
}

#[test]
fn test_first_with_id() {
    let catalog = [
        Assignment::new(AssignmentId(7), "Quiz", 5),
        Assignment::new(AssignmentId(7), "Lab", 50),
    ]
    .into_iter()
    .collect::<Catalog>();
    assert_eq!(
        catalog.first_with_id(AssignmentId(7)).map(|a| a.name.as_str()),
        Some("Quiz")
    );
    assert!(catalog.first_with_id(AssignmentId(8)).is_none());
    assert!(Catalog::new().is_empty());
}
