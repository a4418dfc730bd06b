use crate::model::{CONSTRUCTS, Construct, N_CONSTRUCTS, Query};
use crate::pipeline::stage2_stats::ColumnStats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructScore {
    pub construct: Construct,
    pub value: f64,
    pub stats: Option<ColumnStats>,
    pub z: f64,
}

/// Zero whenever the spread is zero or undefined.
pub fn z_score(value: f64, stats: Option<&ColumnStats>) -> f64 {
    let Some(stats) = stats else {
        return 0.0;
    };
    if stats.std_dev.is_nan() || stats.std_dev <= 0.0 {
        return 0.0;
    }
    let z = (value - stats.mean) / stats.std_dev;
    if z.is_finite() { z } else { 0.0 }
}

pub fn run_stage3(
    query: &Query,
    stats: &[Option<ColumnStats>; N_CONSTRUCTS],
) -> [ConstructScore; N_CONSTRUCTS] {
    CONSTRUCTS.map(|construct| {
        let value = query.score(construct);
        let col = stats[construct.index()];
        ConstructScore {
            construct,
            value,
            stats: col,
            z: z_score(value, col.as_ref()),
        }
    })
}
