use std::io::{self, Write};

/// Bin edges used for assignment histograms, in percent.
pub const PERCENT_BINS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

const X_LABEL: &str = "Percentage";
const Y_LABEL: &str = "Number of Students";

/// Number of values falling in each bin. Bins are half-open, except the
/// last one which also contains its upper edge. Values outside of the
/// edges are not counted.
#[derive(Debug)]
pub struct Histogram<'a> {
    title: String,
    edges: &'a [f64],
    counts: Vec<usize>,
}

impl<'a> Histogram<'a> {
    pub fn new(title: impl Into<String>, values: &[f64], edges: &'a [f64]) -> Self {
        let mut counts = vec![0; edges.len().saturating_sub(1)];
        for &value in values {
            if let Some(bin) = bin_of(edges, value) {
                counts[bin] += 1;
            }
        }
        Histogram {
            title: title.into(),
            edges,
            counts,
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Draw the histogram as horizontal bars, the longest one being `width`
    /// characters long.
    pub fn render<W: Write>(&self, out: &mut W, width: usize) -> io::Result<()> {
        let counts = self.counts();
        let labels = (0..counts.len())
            .map(|bin| self.label(bin))
            .collect::<Vec<_>>();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let highest = counts.iter().copied().max().unwrap_or(0);
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{Y_LABEL} by {X_LABEL}:")?;
        for (label, &count) in labels.iter().zip(counts) {
            let bar = if highest == 0 {
                0
            } else {
                (count * width).div_ceil(highest)
            };
            writeln!(out, "  {label:>label_width$} | {} {count}", "#".repeat(bar))?;
        }
        Ok(())
    }

    fn label(&self, bin: usize) -> String {
        let closing = if bin + 2 == self.edges.len() { ']' } else { ')' };
        format!("[{}, {}{closing}", self.edges[bin], self.edges[bin + 1])
    }
}

fn bin_of(edges: &[f64], value: f64) -> Option<usize> {
    if let Some(bin) = edges.windows(2).position(|w| w[0] <= value && value < w[1]) {
        return Some(bin);
    }
    match edges.last() {
        Some(&last) if value == last && edges.len() > 1 => Some(edges.len() - 2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let values = [0.0, 10.0, 25.0, 49.9, 50.0, 75.0, 99.0, 100.0];
        let histogram = Histogram::new("HW1", &values, &PERCENT_BINS);
        assert_eq!(histogram.counts(), &[2, 2, 1, 3]);
    }

    #[test]
    fn test_out_of_range_values_are_ignored() {
        let values = [-5.0, 100.5, f64::NAN, 30.0];
        let histogram = Histogram::new("HW1", &values, &PERCENT_BINS);
        assert_eq!(histogram.counts(), &[0, 1, 0, 0]);
    }

    #[test]
    fn test_render() {
        let values = [10.0, 60.0, 80.0, 90.0, 100.0];
        let histogram = Histogram::new("Histogram for HW1", &values, &PERCENT_BINS);
        let mut out = Vec::new();
        histogram.render(&mut out, 6).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Histogram for HW1\n\
             Number of Students by Percentage:\n\
             \x20   [0, 25) | ## 1\n\
             \x20  [25, 50) |  0\n\
             \x20  [50, 75) | ## 1\n\
             \x20 [75, 100] | ###### 3\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let histogram = Histogram::new("Empty", &[], &PERCENT_BINS);
        let mut out = Vec::new();
        histogram.render(&mut out, 10).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.lines().skip(2).all(|line| line.ends_with("|  0")));
    }
}
