use crate::grade::compute_grade;
use crate::model::Gradebook;
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, PartialEq, Serialize)]
pub struct GradeRecord<'a> {
    pub name: &'a str,
    pub id: i64,
    pub grade: i64,
}

/// Grade of every student on the roster, sorted by name.
pub fn grade_records(g: &Gradebook) -> Result<Vec<GradeRecord<'_>>> {
    g.students
        .sorted_by_name()
        .into_iter()
        .filter_map(|(name, id)| {
            compute_grade(name, &g.students, &g.assignments, &g.submissions)
                .transpose()
                .map(|grade| {
                    grade.map(|grade| GradeRecord {
                        name,
                        id: id.0,
                        grade,
                    })
                })
        })
        .collect()
}

pub fn write_grades<W: Write>(records: &[GradeRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_grades(g: &Gradebook, file_name: &Path) -> Result<()> {
    let records = grade_records(g)?;
    let file = std::fs::File::create(file_name)
        .wrap_err_with(|| format!("cannot create {}", file_name.display()))?;
    write_grades(&records, file)
        .wrap_err_with(|| format!("cannot write grades to {}", file_name.display()))?;
    info!(students = records.len(), file = %file_name.display(), "grades exported");
    Ok(())
}
