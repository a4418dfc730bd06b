use crate::model::population::PopulationRow;

pub const DEFAULT_AGE_RADIUS: i64 = 2;
pub const DEFAULT_IQ_RADIUS: i64 = 5;

/// Inclusive age and IQ radii around the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CohortWindow {
    pub age_radius: i64,
    pub iq_radius: i64,
}

impl Default for CohortWindow {
    fn default() -> Self {
        Self {
            age_radius: DEFAULT_AGE_RADIUS,
            iq_radius: DEFAULT_IQ_RADIUS,
        }
    }
}

/// Bounds are computed in `f64` so no centre/radius pair can overflow.
fn bounds(centre: i64, radius: i64) -> (f64, f64) {
    let (centre, radius) = (centre as f64, radius as f64);
    (centre - radius, centre + radius)
}

impl CohortWindow {
    pub fn age_bounds(&self, age: i64) -> (f64, f64) {
        bounds(age, self.age_radius)
    }

    pub fn iq_bounds(&self, iq: i64) -> (f64, f64) {
        bounds(iq, self.iq_radius)
    }

    /// Rows with a missing age or IQ never match.
    pub fn matches(&self, row: &PopulationRow, age: i64, iq: i64) -> bool {
        let (Some(row_age), Some(row_iq)) = (row.age, row.iq) else {
            return false;
        };
        let (age_lo, age_hi) = self.age_bounds(age);
        let (iq_lo, iq_hi) = self.iq_bounds(iq);
        row_age >= age_lo && row_age <= age_hi && row_iq >= iq_lo && row_iq <= iq_hi
    }
}
