use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64;
use tracing::info;

use crate::input::{PopulationProvider, ProviderError};
use crate::model::{N_CONSTRUCTS, PopulationRow, PopulationTable};

pub const DEFAULT_ROWS: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticParams {
    pub rows: usize,
    pub seed: u64,
    /// Half-open range of generated ages.
    pub age_min: i64,
    pub age_max: i64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
            age_min: 18,
            age_max: 80,
            mean: 100.0,
            std_dev: 15.0,
        }
    }
}

/// Ages are uniform integers; IQ and every construct are drawn from the same normal.
pub fn generate_population(params: &SyntheticParams) -> Result<PopulationTable, ProviderError> {
    if params.age_min >= params.age_max {
        return Err(ProviderError::InvalidParameter(format!(
            "empty age range [{}, {})",
            params.age_min, params.age_max
        )));
    }
    let normal = Normal::new(params.mean, params.std_dev)
        .map_err(|e| ProviderError::InvalidParameter(format!("normal distribution: {e}")))?;
    let mut rng = Pcg64::seed_from_u64(params.seed);

    let mut rows = Vec::with_capacity(params.rows);
    for _ in 0..params.rows {
        let age = rng.random_range(params.age_min..params.age_max) as f64;
        let iq = normal.sample(&mut rng);
        let mut constructs = [None; N_CONSTRUCTS];
        for slot in &mut constructs {
            *slot = Some(normal.sample(&mut rng));
        }
        rows.push(PopulationRow {
            age: Some(age),
            iq: Some(iq),
            constructs,
        });
    }
    Ok(PopulationTable::new(rows))
}

/// Generated once at construction and shared on every load.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    table: Arc<PopulationTable>,
}

impl SyntheticProvider {
    pub fn new(params: &SyntheticParams) -> Result<Self, ProviderError> {
        let table = generate_population(params)?;
        info!(
            "generated synthetic population: rows={}, seed={}",
            table.len(),
            params.seed
        );
        Ok(Self {
            table: Arc::new(table),
        })
    }
}

impl PopulationProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Arc<PopulationTable>, ProviderError> {
        Ok(Arc::clone(&self.table))
    }
}
