use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub mod coerce;
pub mod columns;
pub mod csv_table;
pub mod sheet;
pub mod synthetic;

use csv_table::PublicCsvProvider;
use sheet::{AccessGate, AuthenticatedSheetProvider};
use synthetic::{SyntheticParams, SyntheticProvider};

use crate::model::PopulationTable;

/// Every variant means the population is unavailable; the engine is never reached.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("not authenticated: an access token is required for sheet data")]
    Unauthenticated,
    #[error("empty source: {0}")]
    EmptySource(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub trait PopulationProvider: Send + Sync {
    fn name(&self) -> &str;
    fn load(&self) -> Result<Arc<PopulationTable>, ProviderError>;
}

#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Synthetic(SyntheticParams),
    PublicCsv { path: PathBuf },
    AuthenticatedSheet { path: PathBuf, gate: AccessGate },
}

pub fn build_provider(config: &ProviderConfig) -> Result<Box<dyn PopulationProvider>, ProviderError> {
    let provider: Box<dyn PopulationProvider> = match config {
        ProviderConfig::Synthetic(params) => Box::new(SyntheticProvider::new(params)?),
        ProviderConfig::PublicCsv { path } => Box::new(PublicCsvProvider::new(path.clone())),
        ProviderConfig::AuthenticatedSheet { path, gate } => Box::new(
            AuthenticatedSheetProvider::new(path.clone(), gate.clone()),
        ),
    };
    Ok(provider)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
