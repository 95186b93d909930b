use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Students indexed by name. A later entry with the same name replaces
/// the earlier one, and nothing prevents two names from sharing an id.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    ids: HashMap<String, StudentId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, id: StudentId) -> Option<StudentId> {
        self.ids.insert(name, id)
    }

    pub fn id_of(&self, name: &str) -> Option<StudentId> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StudentId)> {
        self.ids.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn sorted_by_name(&self) -> Vec<(&str, StudentId)> {
        let mut students = self.iter().collect::<Vec<_>>();
        students.sort_by_key(|&(name, id)| (name, id));
        students
    }
}

impl<S: Into<String>> FromIterator<(S, StudentId)> for Roster {
    fn from_iter<I: IntoIterator<Item = (S, StudentId)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (name, id) in iter {
            roster.insert(name.into(), id);
        }
        roster
    }
}
