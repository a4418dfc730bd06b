use crate::model::{CohortWindow, PopulationRow, PopulationTable, Query};

#[derive(Debug, Clone)]
pub struct Cohort<'a> {
    pub rows: Vec<&'a PopulationRow>,
}

impl Cohort<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Observed (min, max) age among matched rows, not the window.
    pub fn age_range(&self) -> Option<(f64, f64)> {
        observed_range(self.rows.iter().filter_map(|r| r.age))
    }

    pub fn iq_range(&self) -> Option<(f64, f64)> {
        observed_range(self.rows.iter().filter_map(|r| r.iq))
    }
}

pub fn run_stage1<'a>(
    table: &'a PopulationTable,
    query: &Query,
    window: &CohortWindow,
) -> Cohort<'a> {
    let rows = table
        .rows
        .iter()
        .filter(|row| window.matches(row, query.age, query.iq))
        .collect();
    Cohort { rows }
}

fn observed_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_cohort.rs"]
mod tests;
