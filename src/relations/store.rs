//! The binary relation store consumed by the search.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::pattern::{Direction, GradualItem};
use crate::{GradacoError, GradacoResult};

use super::matrix::{pair_count, RelationMatrix};

/// Precomputed relation matrices ("bins") for every eligible gradual item.
///
/// Immutable once built. Items whose relation has too little support are
/// listed as invalid and never combined.
#[derive(Debug, Clone)]
pub struct BinaryRelationStore {
    attributes: Vec<usize>,
    row_count: usize,
    valid_bins: HashMap<GradualItem, RelationMatrix>,
    invalid_bins: HashSet<GradualItem>,
    has_no_bins: bool,
}

impl BinaryRelationStore {
    /// Starts a store for `row_count` rows.
    pub fn builder(row_count: usize) -> StoreBuilder {
        StoreBuilder::new(row_count)
    }

    /// Builds the store from numeric columns.
    ///
    /// For every listed attribute the `+` bin holds `(i, j)` when
    /// `column[i] < column[j]` and the `-` bin when `column[i] > column[j]`.
    /// Bins below `min_support` are filed as invalid. The store reports no
    /// usable bins when the valid ones span fewer than two attributes.
    pub fn from_columns(
        columns: &[Vec<f64>],
        attributes: &[usize],
        min_support: f64,
    ) -> GradacoResult<Self> {
        let row_count = columns.first().map(Vec::len).unwrap_or(0);
        if row_count < 2 {
            return Err(GradacoError::data(format!(
                "at least 2 rows are needed to form row-pairs, got {}",
                row_count
            )));
        }

        let mut builder = Self::builder(row_count).attributes(attributes.iter().copied());
        for &attribute in attributes {
            let column = columns.get(attribute).ok_or_else(|| {
                GradacoError::data(format!("attribute {} has no column", attribute))
            })?;
            if column.len() != row_count {
                return Err(GradacoError::data(format!(
                    "column {} has {} values, expected {}",
                    attribute,
                    column.len(),
                    row_count
                )));
            }

            for direction in Direction::ALL {
                let item = GradualItem::new(attribute, direction);
                let matrix = RelationMatrix::from_fn(row_count, |i, j| match direction {
                    Direction::Increasing => column[i] < column[j],
                    Direction::Decreasing => column[i] > column[j],
                });
                let support = matrix.support();
                if support >= min_support {
                    builder = builder.valid_bin(item, matrix);
                } else {
                    tracing::debug!(item = %item, support, "bin below threshold");
                    builder = builder.invalid_bin(item);
                }
            }
        }

        let mut store = builder.build()?;
        let covered: BTreeSet<usize> = store.valid_bins.keys().map(|i| i.attribute).collect();
        store.has_no_bins = covered.len() < 2;
        tracing::info!(
            rows = row_count,
            valid = store.valid_bins.len(),
            invalid = store.invalid_bins.len(),
            "relation store built"
        );
        Ok(store)
    }

    /// Attribute indices eligible for pattern mining, in order.
    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Denominator of every support value: `n(n-1)/2`.
    pub fn pair_count(&self) -> usize {
        pair_count(self.row_count)
    }

    /// Relation matrix of a valid item.
    pub fn bin(&self, item: &GradualItem) -> Option<&RelationMatrix> {
        self.valid_bins.get(item)
    }

    /// True if the item was filed as having no admissible relation.
    pub fn is_invalid(&self, item: &GradualItem) -> bool {
        self.invalid_bins.contains(item)
    }

    pub fn valid_bin_count(&self) -> usize {
        self.valid_bins.len()
    }

    /// Items with a usable relation matrix.
    pub fn valid_items(&self) -> impl Iterator<Item = &GradualItem> {
        self.valid_bins.keys()
    }

    /// True when the data cannot produce any relation worth searching.
    pub fn has_no_bins(&self) -> bool {
        self.has_no_bins
    }
}

/// Builder for stores supplied directly by a dataset collaborator.
#[derive(Debug)]
pub struct StoreBuilder {
    row_count: usize,
    attributes: Vec<usize>,
    valid_bins: HashMap<GradualItem, RelationMatrix>,
    invalid_bins: HashSet<GradualItem>,
    has_no_bins: bool,
    duplicate: Option<GradualItem>,
}

impl StoreBuilder {
    fn new(row_count: usize) -> Self {
        Self {
            row_count,
            attributes: Vec::new(),
            valid_bins: HashMap::new(),
            invalid_bins: HashSet::new(),
            has_no_bins: false,
            duplicate: None,
        }
    }

    /// Sets the eligible attributes. Repeats are dropped, order is kept.
    pub fn attributes<I: IntoIterator<Item = usize>>(mut self, attributes: I) -> Self {
        for attribute in attributes {
            if !self.attributes.contains(&attribute) {
                self.attributes.push(attribute);
            }
        }
        self
    }

    /// Adds the relation matrix of a valid item.
    pub fn valid_bin(mut self, item: GradualItem, matrix: RelationMatrix) -> Self {
        if self.valid_bins.insert(item, matrix).is_some() {
            self.duplicate.get_or_insert(item);
        }
        self
    }

    /// Marks an item as having no admissible relation.
    pub fn invalid_bin(mut self, item: GradualItem) -> Self {
        self.invalid_bins.insert(item);
        self
    }

    /// Flags the data as unusable for the search.
    pub fn no_bins(mut self, has_no_bins: bool) -> Self {
        self.has_no_bins = has_no_bins;
        self
    }

    /// Checks consistency and freezes the store.
    pub fn build(self) -> GradacoResult<BinaryRelationStore> {
        if let Some(item) = self.duplicate {
            return Err(GradacoError::data(format!("bin {} supplied twice", item)));
        }
        for (item, matrix) in &self.valid_bins {
            if matrix.rows() != self.row_count {
                return Err(GradacoError::data(format!(
                    "bin {} has {} rows, expected {}",
                    item,
                    matrix.rows(),
                    self.row_count
                )));
            }
            if matrix.support() > 1.0 {
                return Err(GradacoError::data(format!(
                    "bin {} covers {} entries, more than the {} row-pairs",
                    item,
                    matrix.count_ones(),
                    pair_count(self.row_count)
                )));
            }
            if self.invalid_bins.contains(item) {
                return Err(GradacoError::data(format!(
                    "bin {} is marked both valid and invalid",
                    item
                )));
            }
        }
        let unknown = self
            .valid_bins
            .keys()
            .chain(self.invalid_bins.iter())
            .find(|item| !self.attributes.contains(&item.attribute));
        if let Some(item) = unknown {
            return Err(GradacoError::data(format!(
                "bin {} is on an attribute outside the search space",
                item
            )));
        }

        Ok(BinaryRelationStore {
            attributes: self.attributes,
            row_count: self.row_count,
            valid_bins: self.valid_bins,
            invalid_bins: self.invalid_bins,
            has_no_bins: self.has_no_bins,
        })
    }
}
