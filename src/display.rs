use crate::histogram::{Histogram, PERCENT_BINS};
use crate::stats::Statistics;
use std::io::{self, Write};

/// Percentages read from submission files are reals and are shown as
/// such, `80` being displayed as `80.0`.
fn percent(value: f64) -> String {
    format!("{value:?}")
}

pub fn display_grade<W: Write>(out: &mut W, name: &str, grade: Option<i64>) -> io::Result<()> {
    match grade {
        Some(grade) => writeln!(out, "{name}'s grade: {grade}%"),
        None => writeln!(out, "Student not found"),
    }
}

pub fn display_stats<W: Write>(
    out: &mut W,
    name: &str,
    stats: Option<Statistics>,
) -> io::Result<()> {
    match stats {
        Some(stats) => {
            // Without any submission, the bounds are plain zeros
            let (min, max) = if stats.count == 0 {
                (String::from("0"), String::from("0"))
            } else {
                (percent(stats.min), percent(stats.max))
            };
            writeln!(
                out,
                "{name} Statistics: Min={min}%, Max={max}%, Average={:.2}%",
                stats.average
            )
        }
        None => writeln!(out, "Assignment not found"),
    }
}

pub fn display_histogram<W: Write>(
    out: &mut W,
    name: &str,
    scores: Option<&[f64]>,
    width: usize,
) -> io::Result<()> {
    match scores {
        Some(scores) => {
            Histogram::new(format!("Histogram for {name}"), scores, &PERCENT_BINS).render(out, width)
        }
        None => writeln!(out, "Assignment not found"),
    }
}
