//! Greedy support validation of candidate patterns.

use crate::pattern::GradualPattern;
use crate::relations::{BinaryRelationStore, RelationMatrix};
use crate::GradacoResult;

/// Outcome of validating a candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// At least two items survived; support is at or above the threshold.
    Refined(GradualPattern),
    /// Fewer than two items survived; the candidate comes back untouched.
    Unrefined(GradualPattern),
}

impl Validation {
    pub fn is_refined(&self) -> bool {
        matches!(self, Validation::Refined(_))
    }

    pub fn pattern(&self) -> &GradualPattern {
        match self {
            Validation::Refined(p) | Validation::Unrefined(p) => p,
        }
    }

    pub fn into_pattern(self) -> GradualPattern {
        match self {
            Validation::Refined(p) | Validation::Unrefined(p) => p,
        }
    }
}

/// Combines relation matrices of a candidate's items and measures support.
pub struct PatternValidator<'a> {
    store: &'a BinaryRelationStore,
    min_support: f64,
}

impl<'a> PatternValidator<'a> {
    pub fn new(store: &'a BinaryRelationStore, min_support: f64) -> Self {
        Self { store, min_support }
    }

    /// Validates `candidate` item by item.
    ///
    /// Items without a usable bin are skipped. The first usable item seeds
    /// the running matrix; each later one is kept only if ANDing it leaves
    /// support at or above the threshold, and a rejected item does not stop
    /// the remaining ones from being tried.
    pub fn validate(&self, candidate: &GradualPattern) -> GradacoResult<Validation> {
        let mut refined = GradualPattern::new();
        let mut running: Option<RelationMatrix> = None;

        for item in candidate.items() {
            if self.store.is_invalid(item) {
                continue;
            }
            let Some(bin) = self.store.bin(item) else {
                continue;
            };

            running = match running {
                None => {
                    refined.add_item(*item);
                    Some(bin.clone())
                }
                Some(current) => {
                    let combined = current.and(bin)?;
                    let support = combined.support();
                    if support >= self.min_support {
                        refined.add_item(*item);
                        refined.set_support(support);
                        Some(combined)
                    } else {
                        tracing::trace!(item = %item, support, "item dropped");
                        Some(current)
                    }
                }
            };
        }

        if refined.len() <= 1 {
            Ok(Validation::Unrefined(candidate.clone()))
        } else {
            Ok(Validation::Refined(refined))
        }
    }

    /// Support of all of `pattern`'s items taken together.
    ///
    /// An item with no usable bin makes the support zero.
    pub fn support_of(&self, pattern: &GradualPattern) -> GradacoResult<f64> {
        let mut running: Option<RelationMatrix> = None;
        for item in pattern.items() {
            let Some(bin) = self.store.bin(item) else {
                return Ok(0.0);
            };
            running = Some(match running {
                None => bin.clone(),
                Some(current) => current.and(bin)?,
            });
        }
        Ok(running.map(|m| m.support()).unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GradualItem;

    fn inc(a: usize) -> GradualItem {
        GradualItem::increasing(a)
    }

    fn dec(a: usize) -> GradualItem {
        GradualItem::decreasing(a)
    }

    /// Ten rows. `0+` and `2+` hold on every ordered pair `i < j`, `1+` on
    /// all but the five pairs starting at row 0. `3+` only holds on pairs
    /// starting at row 0. `1-` is invalid.
    fn store() -> BinaryRelationStore {
        let all = RelationMatrix::from_fn(10, |i, j| i < j);
        let most = RelationMatrix::from_fn(10, |i, j| i < j && !(i == 0 && j <= 5));
        let few = RelationMatrix::from_fn(10, |i, j| i == 0 && j > 0);
        BinaryRelationStore::builder(10)
            .attributes([0, 1, 2, 3])
            .valid_bin(inc(0), all.clone())
            .valid_bin(inc(1), most)
            .valid_bin(inc(2), all)
            .valid_bin(inc(3), few)
            .invalid_bin(dec(1))
            .build()
            .unwrap()
    }

    #[test]
    fn test_two_items_refined() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);
        let result = validator
            .validate(&GradualPattern::from_items([inc(0), inc(1)]))
            .unwrap();

        assert!(result.is_refined());
        let p = result.pattern();
        assert_eq!(p.items(), &[inc(0), inc(1)]);
        assert!((p.support() - 40.0 / 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_low_support_item_dropped_but_rest_kept() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);
        let result = validator
            .validate(&GradualPattern::from_items([inc(0), inc(3), inc(2), inc(1)]))
            .unwrap();

        let p = result.into_pattern();
        assert_eq!(p.items(), &[inc(0), inc(2), inc(1)]);
        assert!((p.support() - 40.0 / 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_and_missing_bins_skipped() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);
        let result = validator
            .validate(&GradualPattern::from_items([dec(1), dec(0), inc(0), inc(2)]))
            .unwrap();

        assert_eq!(result.pattern().items(), &[inc(0), inc(2)]);
        assert_eq!(result.pattern().support(), 1.0);
    }

    #[test]
    fn test_single_survivor_returns_original() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);
        let candidate = GradualPattern::from_items([inc(0), inc(3)]);
        let result = validator.validate(&candidate).unwrap();

        assert_eq!(result, Validation::Unrefined(candidate));
        assert_eq!(result.pattern().support(), 0.0);
    }

    #[test]
    fn test_revalidation_is_stable() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);
        let first = validator
            .validate(&GradualPattern::from_items([inc(1), inc(3), inc(0), inc(2)]))
            .unwrap()
            .into_pattern();
        let second = validator.validate(&first).unwrap().into_pattern();

        assert_eq!(first, second);
    }

    #[test]
    fn test_support_of_combines_every_item() {
        let store = store();
        let validator = PatternValidator::new(&store, 0.8);

        let p = GradualPattern::from_items([inc(0), inc(1), inc(3)]);
        assert!((validator.support_of(&p).unwrap() - 4.0 / 45.0).abs() < 1e-12);
        assert_eq!(validator.support_of(&GradualPattern::from_items([dec(1)])).unwrap(), 0.0);
        assert_eq!(validator.support_of(&GradualPattern::new()).unwrap(), 0.0);
    }
}
