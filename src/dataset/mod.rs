//! Numeric datasets given as JSON documents.
//!
//! ```json
//! { "titles": ["temp", "sales"], "rows": [[21.0, 140.0], [23.5, 151.0]] }
//! ```
//!
//! Every column is treated as an attribute eligible for mining.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::relations::BinaryRelationStore;
use crate::{GradacoError, GradacoResult};

/// A table of numeric rows with optional column titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub titles: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(titles: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { titles, rows }
    }

    /// Loads a dataset from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> GradacoResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(self.titles.len())
    }

    /// Column titles, numbered when the document has none.
    pub fn column_titles(&self) -> Vec<String> {
        if self.titles.is_empty() {
            (0..self.column_count()).map(|i| i.to_string()).collect()
        } else {
            self.titles.clone()
        }
    }

    /// Transposes the rows into columns.
    pub fn columns(&self) -> GradacoResult<Vec<Vec<f64>>> {
        let width = self.column_count();
        if !self.titles.is_empty() && self.titles.len() != width {
            return Err(GradacoError::data(format!(
                "{} titles for {} columns",
                self.titles.len(),
                width
            )));
        }

        let mut columns = vec![Vec::with_capacity(self.rows.len()); width];
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                return Err(GradacoError::data(format!(
                    "row {} has {} values, expected {}",
                    index,
                    row.len(),
                    width
                )));
            }
            if let Some(value) = row.iter().find(|v| !v.is_finite()) {
                return Err(GradacoError::data(format!(
                    "row {} holds a non-finite value ({})",
                    index, value
                )));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(*value);
            }
        }
        Ok(columns)
    }

    /// Builds the relation store over every column.
    pub fn relation_store(&self, min_support: f64) -> GradacoResult<BinaryRelationStore> {
        let columns = self.columns()?;
        let attributes: Vec<usize> = (0..columns.len()).collect();
        if attributes.is_empty() {
            return Err(GradacoError::data("dataset has no columns"));
        }
        BinaryRelationStore::from_columns(&columns, &attributes, min_support)
    }
}
