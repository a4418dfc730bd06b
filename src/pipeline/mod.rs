pub mod stage1_cohort;
pub mod stage2_stats;
pub mod stage3_zscores;
pub mod stage4_report;

use tracing::{debug, warn};

use crate::model::{CohortWindow, N_CONSTRUCTS, PopulationTable, Query};
use stage1_cohort::run_stage1;
use stage2_stats::run_stage2;
use stage3_zscores::{ConstructScore, run_stage3};

#[derive(Debug, Clone, PartialEq)]
pub struct CohortResult {
    /// Always nine entries, canonical construct order.
    pub scores: [ConstructScore; N_CONSTRUCTS],
    pub cohort_size: usize,
    pub age_range: Option<(f64, f64)>,
    pub iq_range: Option<(f64, f64)>,
}

impl CohortResult {
    pub fn is_empty_cohort(&self) -> bool {
        self.cohort_size == 0
    }
}

/// Scores `query` against the rows of `population` that fall inside `window`.
///
/// Pure and infallible: an empty cohort yields all-zero scores, a zero spread yields a
/// zero score for that construct. Query validation happens when the [`Query`] is built.
pub fn compute_z_scores(
    population: &PopulationTable,
    query: &Query,
    window: &CohortWindow,
) -> CohortResult {
    let cohort = run_stage1(population, query, window);
    debug!(
        "cohort filter: {} of {} rows matched age {}±{}, IQ {}±{}",
        cohort.len(),
        population.len(),
        query.age,
        window.age_radius,
        query.iq,
        window.iq_radius
    );

    if cohort.is_empty() {
        warn!("no peers matched the age/IQ window; returning zero scores");
    }

    let stats = run_stage2(&cohort);
    let scores = run_stage3(query, &stats);

    CohortResult {
        scores,
        cohort_size: cohort.len(),
        age_range: cohort.age_range(),
        iq_range: cohort.iq_range(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/engine.rs"]
mod tests;
