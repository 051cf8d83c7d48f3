//! Gradual patterns: ordered item lists with a support value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::item::GradualItem;

/// A candidate or validated gradual pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradualPattern {
    items: Vec<GradualItem>,
    support: f64,
}

impl GradualPattern {
    /// Creates an empty pattern with zero support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unvalidated pattern from a list of items.
    ///
    /// Repeated items are kept once, in first-seen order.
    pub fn from_items<I: IntoIterator<Item = GradualItem>>(items: I) -> Self {
        let mut pattern = Self::new();
        for item in items {
            pattern.add_item(item);
        }
        pattern
    }

    /// Appends an item unless it is already present.
    pub fn add_item(&mut self, item: GradualItem) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Records the support computed by validation.
    pub fn set_support(&mut self, support: f64) {
        self.support = support;
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[GradualItem] {
        &self.items
    }

    /// Fraction of row-pairs satisfying every item. Zero until validated.
    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Canonical set of items, independent of order.
    pub fn item_set(&self) -> BTreeSet<GradualItem> {
        self.items.iter().copied().collect()
    }

    /// Item set with every direction flipped.
    pub fn inverse_item_set(&self) -> BTreeSet<GradualItem> {
        self.items.iter().map(|item| item.inverse()).collect()
    }

    /// Pattern with every direction flipped and the same support.
    pub fn inverse(&self) -> Self {
        Self {
            items: self.items.iter().map(|item| item.inverse()).collect(),
            support: self.support,
        }
    }

    /// True if both patterns hold the same items, in any order.
    pub fn same_items(&self, other: &GradualPattern) -> bool {
        self.item_set() == other.item_set()
    }

    /// True if `other` holds the same items as this pattern or its inverse.
    pub fn equivalent(&self, other: &GradualPattern) -> bool {
        let theirs = other.item_set();
        self.item_set() == theirs || self.inverse_item_set() == theirs
    }

    /// Attributes used by the pattern, in item order.
    pub fn attributes(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.attribute)
    }

    /// True if some item is on `attribute`.
    pub fn uses_attribute(&self, attribute: usize) -> bool {
        self.attributes().any(|a| a == attribute)
    }

    /// One label per item using column titles, e.g. `temp+`.
    ///
    /// Attributes without a title fall back to their index.
    pub fn item_labels(&self, titles: &[String]) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match titles.get(item.attribute) {
                Some(title) => format!("{}{}", title, item.direction),
                None => item.to_string(),
            })
            .collect()
    }

    /// Renders the items with column titles, e.g. `[temp+, sales-]`.
    pub fn describe(&self, titles: &[String]) -> String {
        format!("[{}]", self.item_labels(titles).join(", "))
    }
}

impl std::fmt::Display for GradualPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {:.3}", self.describe(&[]), self.support)
    }
}
