use crate::model::{Catalog, Submission};

/// Descriptive statistics of the percentages obtained on an assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl Statistics {
    /// Statistics of `scores`, all zero when there are none.
    #[allow(clippy::cast_precision_loss)]
    pub fn of(scores: &[f64]) -> Statistics {
        if scores.is_empty() {
            return Statistics::default();
        }
        Statistics {
            count: scores.len(),
            min: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            average: scores.iter().sum::<f64>() / scores.len() as f64,
        }
    }
}

/// Statistics of the named assignment over every submission for it, or
/// `None` if the catalog has no such assignment.
pub fn compute_stats(
    name: &str,
    assignments: &Catalog,
    submissions: &[Submission],
) -> Option<Statistics> {
    let assignment = assignments.get(name)?;
    let scores = submissions
        .iter()
        .filter(|s| s.assignment == assignment.id)
        .map(|s| s.percent)
        .collect::<Vec<_>>();
    Some(Statistics::of(&scores))
}
