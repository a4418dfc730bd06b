use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flate2::read::MultiGzDecoder;
use tracing::{info, warn};

use crate::input::coerce::coerce_cell;
use crate::input::columns::ColumnMap;
use crate::input::{PopulationProvider, ProviderError};
use crate::model::{CONSTRUCTS, PopulationRow, PopulationTable};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, ProviderError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parses a CSV export. Unknown columns are ignored; ragged rows are tolerated.
pub fn parse_population_csv<R: Read>(reader: R) -> Result<PopulationTable, ProviderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(ProviderError::EmptySource("csv header is empty".to_string()));
    }
    let headers: Vec<&str> = headers.iter().collect();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut dropped_cells = 0usize;
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let row: PopulationRow =
            columns.build_row(|col| record.get(col).and_then(coerce_cell));
        dropped_cells += count_unparseable(&record, &columns);
        rows.push(row);
    }

    if dropped_cells > 0 {
        warn!(
            "{} non-empty cells could not be read as numbers; treating them as missing",
            dropped_cells
        );
    }

    Ok(PopulationTable::new(rows))
}

fn count_unparseable(record: &csv::StringRecord, columns: &ColumnMap) -> usize {
    std::iter::once(columns.age)
        .chain(std::iter::once(columns.iq))
        .chain(columns.constructs.iter().copied())
        .filter(|&col| {
            let raw = record.get(col).unwrap_or("");
            !raw.is_empty() && coerce_cell(raw).is_none()
        })
        .count()
}

pub fn write_population_csv(table: &PopulationTable, path: &Path) -> Result<(), ProviderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut w = csv::Writer::from_path(path)?;

    let mut header = vec!["age", "IQ"];
    header.extend(CONSTRUCTS.iter().map(|c| c.name()));
    w.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(header.len());
        record.push(format_cell(row.age));
        record.push(format_cell(row.iq));
        for v in row.constructs {
            record.push(format_cell(v));
        }
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

fn format_cell(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

/// Reads a CSV export of the population from a local file.
#[derive(Debug, Clone)]
pub struct PublicCsvProvider {
    path: PathBuf,
}

impl PublicCsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PopulationProvider for PublicCsvProvider {
    fn name(&self) -> &str {
        "public-csv"
    }

    fn load(&self) -> Result<Arc<PopulationTable>, ProviderError> {
        info!("reading population csv: {}", self.path.display());
        let reader = open_maybe_gz(&self.path)?;
        let table = parse_population_csv(reader)?;
        if table.is_empty() {
            warn!("{} has a header but no data rows", self.path.display());
        }
        info!("loaded {} population rows", table.len());
        Ok(Arc::new(table))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv_table.rs"]
mod tests;
