#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crate::config::DataConfig;
use crate::model::{Assignment, AssignmentId, Catalog, Gradebook, Roster, StudentId, Submission};
use eyre::{Result, WrapErr, eyre};
use std::path::Path;
use tracing::{debug, trace};

/// Width of the id field at the start of each roster line, in characters.
const STUDENT_ID_WIDTH: usize = 3;

pub struct Loader<'a> {
    data: &'a DataConfig,
}

impl<'a> Loader<'a> {
    pub fn new(data: &'a DataConfig) -> Self {
        Self { data }
    }

    pub fn load(&self) -> Result<Gradebook> {
        let students = load_students(&self.data.students).wrap_err("cannot load students")?;
        let assignments =
            load_assignments(&self.data.assignments).wrap_err("cannot load assignments")?;
        let submissions =
            load_submissions(&self.data.submissions).wrap_err("cannot load submissions")?;
        Ok(Gradebook::new(students, assignments, submissions))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("cannot read {}", path.display()))
}

pub fn load_students(path: &Path) -> Result<Roster> {
    let students = parse_students(&read(path)?)
        .wrap_err_with(|| format!("malformed roster file {}", path.display()))?;
    debug!(path = %path.display(), students = students.len(), "roster loaded");
    Ok(students)
}

/// Each line holds a student id in its first three characters, followed by
/// the student name. Blank lines are ignored.
pub fn parse_students(content: &str) -> Result<Roster> {
    let mut students = Roster::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let split = line
            .char_indices()
            .nth(STUDENT_ID_WIDTH)
            .map_or(line.len(), |(idx, _)| idx);
        let (id, name) = line.split_at(split);
        let id = id
            .trim()
            .parse::<i64>()
            .wrap_err_with(|| format!("line {}: invalid student id {:?}", lineno + 1, id.trim()))?;
        if let Some(previous) = students.insert(name.trim().to_owned(), StudentId(id)) {
            trace!(name = name.trim(), %previous, "student entry replaced");
        }
    }
    Ok(students)
}

pub fn load_assignments(path: &Path) -> Result<Catalog> {
    let assignments = parse_assignments(&read(path)?)
        .wrap_err_with(|| format!("malformed assignments file {}", path.display()))?;
    debug!(path = %path.display(), assignments = assignments.len(), "catalog loaded");
    Ok(assignments)
}

/// Assignments are described by groups of three lines: name, id and
/// points. An incomplete group at the end of the content is ignored.
pub fn parse_assignments(content: &str) -> Result<Catalog> {
    let lines = content.lines().map(str::trim).collect::<Vec<_>>();
    let mut assignments = Catalog::new();
    for (group, chunk) in lines.chunks_exact(3).enumerate() {
        let (name, id, points) = (chunk[0], chunk[1], chunk[2]);
        let first = group * 3 + 1;
        let id = id
            .parse::<i64>()
            .wrap_err_with(|| format!("line {}: invalid assignment id {id:?}", first + 1))?;
        let points = points
            .parse::<i64>()
            .wrap_err_with(|| format!("line {}: invalid points {points:?}", first + 2))?;
        if let Some(previous) = assignments.insert(Assignment::new(AssignmentId(id), name, points))
        {
            trace!(name, previous = %previous.id, "assignment entry replaced");
        }
    }
    if lines.len() % 3 != 0 {
        trace!(
            lines = lines.len() % 3,
            "incomplete trailing assignment ignored"
        );
    }
    Ok(assignments)
}

/// Load every `<assignment id>.txt` file found in `dir`. Other entries are
/// ignored.
pub fn load_submissions(dir: &Path) -> Result<Vec<Submission>> {
    let mut files = Vec::new();
    for entry in
        std::fs::read_dir(dir).wrap_err_with(|| format!("cannot list {}", dir.display()))?
    {
        let entry = entry.wrap_err_with(|| format!("cannot list {}", dir.display()))?;
        let path = entry.path();
        match assignment_id_of(&path) {
            Some(id) if path.is_file() => files.push((id, path)),
            _ => trace!(path = %path.display(), "not a submission file, ignored"),
        }
    }
    files.sort();
    let mut submissions = Vec::new();
    for (id, path) in files {
        let before = submissions.len();
        parse_submissions(id, &read(&path)?, &mut submissions);
        debug!(
            path = %path.display(),
            assignment = %id,
            submissions = submissions.len() - before,
            "submission file loaded"
        );
    }
    Ok(submissions)
}

/// The assignment id encoded in a submission file name such as `12.txt`.
pub fn assignment_id_of(path: &Path) -> Option<AssignmentId> {
    let stem = path.file_name()?.to_str()?.strip_suffix(".txt")?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok().map(AssignmentId)
}

/// Append the submissions found in `content` to `submissions`, skipping
/// malformed lines.
pub fn parse_submissions(assignment: AssignmentId, content: &str, submissions: &mut Vec<Submission>) {
    for (lineno, line) in content.lines().enumerate() {
        match parse_submission_line(line) {
            Ok((student, percent)) => {
                submissions.push(Submission::new(assignment, student, percent));
            }
            Err(e) => trace!(%assignment, line = lineno + 1, "skipping submission line: {e}"),
        }
    }
}

fn parse_submission_line(line: &str) -> Result<(StudentId, f64)> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let &[student, percent] = tokens.as_slice() else {
        return Err(eyre!("expected 2 fields, found {}", tokens.len()));
    };
    let student = student
        .parse::<f64>()
        .wrap_err_with(|| format!("invalid student id {student:?}"))?;
    let percent = percent
        .parse::<f64>()
        .wrap_err_with(|| format!("invalid percentage {percent:?}"))?;
    // Ids are written as numbers and truncated towards zero
    let in_range = student.is_finite() && student.abs() < i64::MAX as f64;
    if !in_range {
        return Err(eyre!("student id {} is not an integer", student));
    }
    Ok((StudentId(student.trunc() as i64), percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_students() {
        let students = parse_students("101Alice\n102Bob\n").unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students.id_of("Alice"), Some(StudentId(101)));
        assert_eq!(students.id_of("Bob"), Some(StudentId(102)));
    }

    #[test]
    fn test_parse_students_padding() {
        let students = parse_students(" 7 Carol Smith  \r\n12 Dan\n\n   \n").unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students.id_of("Carol Smith"), Some(StudentId(7)));
        assert_eq!(students.id_of("Dan"), Some(StudentId(12)));
    }

    #[test]
    fn test_parse_students_last_wins() {
        let students = parse_students("101Alice\n201Alice\n").unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students.id_of("Alice"), Some(StudentId(201)));
    }

    #[test]
    fn test_parse_students_empty_name() {
        let students = parse_students("101\n").unwrap();
        assert_eq!(students.id_of(""), Some(StudentId(101)));
    }

    #[test]
    fn test_parse_students_non_ascii_name() {
        let students = parse_students("103Zoé\n").unwrap();
        assert_eq!(students.id_of("Zoé"), Some(StudentId(103)));
    }

    #[test]
    fn test_parse_students_invalid_id() {
        let err = parse_students("101Alice\nab2Bob\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_assignments() {
        let assignments = parse_assignments("HW1\n1\n100\n Midterm \n 2 \n 50 \n").unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(
            assignments.get("HW1"),
            Some(&Assignment::new(AssignmentId(1), "HW1", 100))
        );
        assert_eq!(
            assignments.get("Midterm"),
            Some(&Assignment::new(AssignmentId(2), "Midterm", 50))
        );
    }

    #[test]
    fn test_parse_assignments_last_wins() {
        let assignments = parse_assignments("HW1\n1\n100\nHW2\n2\n50\nHW1\n3\n10\n").unwrap();
        assert_eq!(
            assignments.get("HW1"),
            Some(&Assignment::new(AssignmentId(3), "HW1", 10))
        );
        assert_eq!(assignments.total_points(), 60);
        let names = assignments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["HW1", "HW2"]);
    }

    #[test]
    fn test_parse_assignments_incomplete_group() {
        let assignments = parse_assignments("HW1\n1\n100\nHW2\n2\n").unwrap();
        assert_eq!(assignments.len(), 1);
        assert!(assignments.get("HW2").is_none());
    }

    #[test]
    fn test_parse_assignments_invalid_points() {
        let err = parse_assignments("HW1\n1\n100\nHW2\n2\nlots\n").unwrap_err();
        assert!(err.to_string().contains("line 6"));
        assert!(parse_assignments("HW1\n1.5\n100\n").is_err());
    }

    #[test]
    fn test_assignment_id_of() {
        assert_eq!(assignment_id_of(Path::new("d/12.txt")), Some(AssignmentId(12)));
        assert_eq!(assignment_id_of(Path::new("007.txt")), Some(AssignmentId(7)));
        assert_eq!(assignment_id_of(Path::new("abc.txt")), None);
        assert_eq!(assignment_id_of(Path::new("1a.txt")), None);
        assert_eq!(assignment_id_of(Path::new("-1.txt")), None);
        assert_eq!(assignment_id_of(Path::new(".txt")), None);
        assert_eq!(assignment_id_of(Path::new("12.csv")), None);
    }

    #[test]
    fn test_parse_submissions_skips_malformed_lines() {
        let mut submissions = Vec::new();
        parse_submissions(
            AssignmentId(3),
            "101 80\n102\nabc 90\n103 x\n\n104 70 1\n105.9 65.5\n",
            &mut submissions,
        );
        assert_eq!(
            submissions,
            vec![
                Submission::new(AssignmentId(3), StudentId(101), 80.0),
                Submission::new(AssignmentId(3), StudentId(105), 65.5),
            ]
        );
    }

    #[test]
    fn test_non_finite_student_id_is_skipped() {
        let mut submissions = Vec::new();
        parse_submissions(AssignmentId(1), "nan 50\ninf 50\n", &mut submissions);
        assert!(submissions.is_empty());
    }

    #[test]
    fn test_load_submissions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "101 80\n102 90\n").unwrap();
        fs::write(dir.path().join("2.txt"), "101 bad\n101 50\n").unwrap();
        fs::write(dir.path().join("abc.txt"), "101 100\n").unwrap();
        fs::write(dir.path().join("3.dat"), "101 100\n").unwrap();
        fs::create_dir(dir.path().join("4.txt")).unwrap();
        let mut submissions = load_submissions(dir.path()).unwrap();
        submissions.sort_by_key(|s| (s.assignment, s.student));
        assert_eq!(
            submissions,
            vec![
                Submission::new(AssignmentId(1), StudentId(101), 80.0),
                Submission::new(AssignmentId(1), StudentId(102), 90.0),
                Submission::new(AssignmentId(2), StudentId(101), 50.0),
            ]
        );
    }

    #[test]
    fn test_load_submissions_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_submissions(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_loader() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataConfig {
            students: dir.path().join("students.txt"),
            assignments: dir.path().join("assignments.txt"),
            submissions: dir.path().join("submissions"),
        };
        fs::write(&data.students, "101Alice\n102Bob\n").unwrap();
        fs::write(&data.assignments, "HW1\n1\n100\n").unwrap();
        fs::create_dir(&data.submissions).unwrap();
        fs::write(data.submissions.join("1.txt"), "101 80\n").unwrap();
        let gradebook = Loader::new(&data).load().unwrap();
        assert_eq!(gradebook.students.len(), 2);
        assert_eq!(gradebook.assignments.len(), 1);
        assert_eq!(gradebook.submissions.len(), 1);
    }

    #[test]
    fn test_loader_reports_missing_roster() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataConfig {
            students: dir.path().join("students.txt"),
            assignments: dir.path().join("assignments.txt"),
            submissions: dir.path().to_path_buf(),
        };
        let err = Loader::new(&data).load().unwrap_err();
        assert_eq!(err.to_string(), "cannot load students");
    }
}
