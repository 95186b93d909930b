use crate::display::{display_grade, display_histogram, display_stats};
use crate::grade::compute_grade;
use crate::model::Gradebook;
use crate::stats::compute_stats;
use eyre::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Offer the menu once, then answer the selected query. An unknown choice
/// does nothing.
pub fn run<R: BufRead, W: Write>(
    g: &Gradebook,
    histogram_width: usize,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "1. Student grade")?;
    writeln!(out, "2. Assignment statistics")?;
    writeln!(out, "3. Assignment graph")?;
    let choice = prompt(input, out, "Enter your selection: ")?;
    match choice.as_str() {
        "1" => {
            let name = prompt(input, out, "What is the student's name: ")?;
            let grade = compute_grade(&name, &g.students, &g.assignments, &g.submissions)?;
            display_grade(out, &name, grade)?;
        }
        "2" => {
            let name = prompt(input, out, "What is the assignment name: ")?;
            display_stats(out, &name, compute_stats(&name, &g.assignments, &g.submissions))?;
        }
        "3" => {
            let name = prompt(input, out, "What is the assignment name: ")?;
            display_histogram(out, &name, g.scores(&name).as_deref(), histogram_width)?;
        }
        other => debug!(choice = other, "unknown menu choice"),
    }
    Ok(())
}

/// Read one line of input, without its line terminator.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("end of input while waiting for an answer to {:?}", question.trim_end());
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}
