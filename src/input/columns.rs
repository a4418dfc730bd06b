use crate::input::ProviderError;
use crate::model::{CONSTRUCTS, Construct, N_CONSTRUCTS, PopulationRow};

/// Positions of the required columns inside a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub age: usize,
    pub iq: usize,
    pub constructs: [usize; N_CONSTRUCTS],
}

impl ColumnMap {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self, ProviderError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| ProviderError::MissingColumn(name.to_string()))
        };

        let age = find("age")?;
        let iq = find("IQ")?;

        let mut constructs = [0usize; N_CONSTRUCTS];
        for construct in CONSTRUCTS {
            constructs[construct.index()] = headers
                .iter()
                .position(|h| Construct::from_header(h.as_ref()) == Some(construct))
                .ok_or_else(|| ProviderError::MissingColumn(construct.name().to_string()))?;
        }

        Ok(Self {
            age,
            iq,
            constructs,
        })
    }

    /// Builds a row from already-coerced cells. Short rows yield missing values.
    pub fn build_row<F>(&self, cell: F) -> PopulationRow
    where
        F: Fn(usize) -> Option<f64>,
    {
        let mut constructs = [None; N_CONSTRUCTS];
        for (slot, &col) in constructs.iter_mut().zip(self.constructs.iter()) {
            *slot = cell(col);
        }
        PopulationRow {
            age: cell(self.age),
            iq: cell(self.iq),
            constructs,
        }
    }
}
