use crate::model::Gradebook;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Warn about data which the grade computations accept but which is
/// likely to be a mistake. Returns the number of warnings issued.
pub fn check_consistency(g: &Gradebook) -> usize {
    check_points(g) + check_roster(g) + check_submissions(g)
}

fn check_points(g: &Gradebook) -> usize {
    let mut warnings = 0;
    for a in g.assignments.iter().filter(|a| a.points <= 0) {
        warn!("assignment {} is worth {} points", a.name, a.points);
        warnings += 1;
    }
    if g.assignments.is_empty() {
        warn!("no assignment is defined, grades cannot be computed");
        warnings += 1;
    } else if g.assignments.total_points() == 0 {
        warn!("assignments are worth 0 points in total, grades cannot be computed");
        warnings += 1;
    }
    let mut names = BTreeMap::new();
    for a in g.assignments.iter() {
        names.entry(a.id).or_insert_with(Vec::new).push(a.name.as_str());
    }
    for (id, names) in names.into_iter().filter(|(_, names)| names.len() > 1) {
        warn!(
            "assignments {} share id {id}, only {} will be graded",
            names.join(", "),
            names[0]
        );
        warnings += 1;
    }
    warnings
}

fn check_roster(g: &Gradebook) -> usize {
    let mut warnings = 0;
    if g.students.is_empty() {
        debug!("roster is empty");
    }
    if let Some(id) = g.students.id_of("") {
        warn!("student {id} has no name");
        warnings += 1;
    }
    let mut names = BTreeMap::new();
    for (name, id) in g.students.sorted_by_name() {
        names.entry(id).or_insert_with(Vec::new).push(name);
    }
    for (id, names) in names.into_iter().filter(|(_, names)| names.len() > 1) {
        warn!("students {} share id {id}", names.join(", "));
        warnings += 1;
    }
    warnings
}

fn check_submissions(g: &Gradebook) -> usize {
    let mut warnings = 0;
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for s in &g.submissions {
        let key = (s.assignment, s.student);
        if !seen.insert(key) && reported.insert(key) {
            warn!(
                "student {} has several submissions for assignment {}, they will be added up",
                s.student, s.assignment
            );
            warnings += 1;
        }
    }
    let students = g.students.iter().map(|(_, id)| id).collect::<HashSet<_>>();
    let unknown_students = g
        .submissions
        .iter()
        .filter(|s| !students.contains(&s.student))
        .count();
    let unknown_assignments = g
        .submissions
        .iter()
        .filter(|s| g.assignments.first_with_id(s.assignment).is_none())
        .count();
    if unknown_students + unknown_assignments > 0 {
        debug!(
            unknown_students,
            unknown_assignments, "some submissions do not match any student or assignment"
        );
    }
    warnings
}
