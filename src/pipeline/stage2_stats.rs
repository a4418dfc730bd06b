use crate::model::{CONSTRUCTS, N_CONSTRUCTS};
use crate::pipeline::stage1_cohort::Cohort;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub n: usize,
    pub mean: f64,
    /// Bessel-corrected; 0 when `n == 1`.
    pub std_dev: f64,
}

/// `None` when the column has no values.
pub fn column_stats(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (ss / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    Some(ColumnStats { n, mean, std_dev })
}

/// Missing cells are dropped per column, so a row can feed some constructs and not others.
pub fn run_stage2(cohort: &Cohort<'_>) -> [Option<ColumnStats>; N_CONSTRUCTS] {
    let mut out = [None; N_CONSTRUCTS];
    let mut buf: Vec<f64> = Vec::with_capacity(cohort.len());
    for construct in CONSTRUCTS {
        buf.clear();
        buf.extend(cohort.rows.iter().filter_map(|r| r.construct(construct)));
        out[construct.index()] = column_stats(&buf);
    }
    out
}
