use crate::model::construct::{Construct, N_CONSTRUCTS};

/// One individual. `None` marks a missing or non-numeric cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationRow {
    pub age: Option<f64>,
    pub iq: Option<f64>,
    pub constructs: [Option<f64>; N_CONSTRUCTS],
}

impl PopulationRow {
    pub fn construct(&self, construct: Construct) -> Option<f64> {
        self.constructs[construct.index()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    pub rows: Vec<PopulationRow>,
}

impl PopulationTable {
    pub fn new(rows: Vec<PopulationRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count of missing cells per column: age, IQ, then constructs in canonical order.
    pub fn missing_counts(&self) -> [usize; N_CONSTRUCTS + 2] {
        let mut out = [0usize; N_CONSTRUCTS + 2];
        for row in &self.rows {
            if row.age.is_none() {
                out[0] += 1;
            }
            if row.iq.is_none() {
                out[1] += 1;
            }
            for (idx, v) in row.constructs.iter().enumerate() {
                if v.is_none() {
                    out[idx + 2] += 1;
                }
            }
        }
        out
    }
}
