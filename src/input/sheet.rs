use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::input::coerce::coerce_json_cell;
use crate::input::columns::ColumnMap;
use crate::input::{PopulationProvider, ProviderError};
use crate::model::PopulationTable;

/// Login state in front of the private sheet.
#[derive(Clone, PartialEq, Eq)]
pub enum AccessGate {
    Authenticated { token: String },
    Unauthenticated,
}

impl AccessGate {
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(t) if !t.is_empty() => AccessGate::Authenticated {
                token: t.to_string(),
            },
            _ => AccessGate::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AccessGate::Authenticated { .. })
    }

    pub fn check(&self) -> Result<(), ProviderError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ProviderError::Unauthenticated)
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessGate::Authenticated { .. } => f.write_str("Authenticated { token: <redacted> }"),
            AccessGate::Unauthenticated => f.write_str("Unauthenticated"),
        }
    }
}

/// Sheets API "values" response: the first row is the header.
#[derive(Debug, Deserialize)]
struct SheetValues {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub fn parse_sheet_values(text: &str) -> Result<PopulationTable, ProviderError> {
    let sheet: SheetValues = serde_json::from_str(text)?;
    let mut grid = sheet.values.into_iter();
    let Some(header) = grid.next() else {
        return Err(ProviderError::EmptySource("sheet has no rows".to_string()));
    };
    let headers: Vec<String> = header
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    let columns = ColumnMap::from_headers(&headers)?;

    let rows = grid
        .filter(|cells| !cells.is_empty())
        .map(|cells| columns.build_row(|col| cells.get(col).and_then(coerce_json_cell)))
        .collect();
    Ok(PopulationTable::new(rows))
}

#[derive(Debug, Clone)]
pub struct AuthenticatedSheetProvider {
    path: PathBuf,
    gate: AccessGate,
}

impl AuthenticatedSheetProvider {
    pub fn new(path: impl Into<PathBuf>, gate: AccessGate) -> Self {
        Self {
            path: path.into(),
            gate,
        }
    }
}

impl PopulationProvider for AuthenticatedSheetProvider {
    fn name(&self) -> &str {
        "authenticated-sheet"
    }

    fn load(&self) -> Result<Arc<PopulationTable>, ProviderError> {
        if let Err(e) = self.gate.check() {
            warn!("sheet access refused: no credentials");
            return Err(e);
        }
        info!("reading sheet export: {}", self.path.display());
        let text = std::fs::read_to_string(&self.path)?;
        let table = parse_sheet_values(&text)?;
        if table.is_empty() {
            warn!("{} has a header but no data rows", self.path.display());
        }
        info!("loaded {} population rows", table.len());
        Ok(Arc::new(table))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/sheet.rs"]
mod tests;
