//! Duplicate and anti-monotonicity checks.
//!
//! Support never grows when items are added to a pattern. A candidate that
//! contains a known loser is bound to fail, and one contained in a known
//! winner brings nothing new. Every check also tries the candidate's inverse,
//! since a pattern and its inverse describe the same row-pairs.

use crate::pattern::GradualPattern;

/// True if `pattern` or its inverse has exactly the items of a stored pattern.
pub fn is_duplicate(
    pattern: &GradualPattern,
    winners: &[GradualPattern],
    losers: &[GradualPattern],
) -> bool {
    losers
        .iter()
        .chain(winners.iter())
        .any(|stored| pattern.equivalent(stored))
}

/// True if `pattern` or its inverse is a subset of some winner.
pub fn is_subset_of_any(pattern: &GradualPattern, winners: &[GradualPattern]) -> bool {
    let items = pattern.item_set();
    let inverse = pattern.inverse_item_set();
    winners.iter().any(|winner| {
        let theirs = winner.item_set();
        items.is_subset(&theirs) || inverse.is_subset(&theirs)
    })
}

/// True if `pattern` or its inverse is a superset of some loser.
pub fn is_superset_of_any(pattern: &GradualPattern, losers: &[GradualPattern]) -> bool {
    let items = pattern.item_set();
    let inverse = pattern.inverse_item_set();
    losers.iter().any(|loser| {
        let theirs = loser.item_set();
        items.is_superset(&theirs) || inverse.is_superset(&theirs)
    })
}

/// A candidate already covered by a confirmed winner.
pub fn is_redundant_subset(pattern: &GradualPattern, winners: &[GradualPattern]) -> bool {
    is_subset_of_any(pattern, winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GradualItem;

    fn p(items: &[GradualItem]) -> GradualPattern {
        GradualPattern::from_items(items.iter().copied())
    }

    fn inc(a: usize) -> GradualItem {
        GradualItem::increasing(a)
    }

    fn dec(a: usize) -> GradualItem {
        GradualItem::decreasing(a)
    }

    #[test]
    fn test_duplicate_exact_and_inverse() {
        let winners = vec![p(&[inc(0), dec(1)])];
        let losers = vec![p(&[inc(2), inc(3)])];

        assert!(is_duplicate(&p(&[dec(1), inc(0)]), &winners, &losers));
        assert!(is_duplicate(&p(&[dec(0), inc(1)]), &winners, &losers));
        assert!(is_duplicate(&p(&[dec(2), dec(3)]), &winners, &losers));
        assert!(!is_duplicate(&p(&[inc(0), inc(1)]), &winners, &losers));
        assert!(!is_duplicate(&p(&[inc(0)]), &winners, &losers));
    }

    #[test]
    fn test_subset_of_winner() {
        let winners = vec![p(&[inc(0), dec(1), inc(2)])];

        assert!(is_subset_of_any(&p(&[inc(0), inc(2)]), &winners));
        assert!(is_subset_of_any(&p(&[dec(0), inc(1)]), &winners));
        assert!(!is_subset_of_any(&p(&[inc(0), inc(1)]), &winners));
        assert!(!is_subset_of_any(&p(&[inc(0), inc(3)]), &winners));
        assert!(is_redundant_subset(&p(&[dec(1), inc(2)]), &winners));
    }

    #[test]
    fn test_superset_of_loser() {
        let losers = vec![p(&[inc(0), dec(1)])];

        assert!(is_superset_of_any(&p(&[inc(0), dec(1), inc(2)]), &losers));
        assert!(is_superset_of_any(&p(&[dec(0), inc(1), dec(2)]), &losers));
        assert!(!is_superset_of_any(&p(&[inc(0), inc(1), inc(2)]), &losers));
        assert!(!is_superset_of_any(&p(&[inc(0)]), &losers));
    }

    #[test]
    fn test_empty_collections_prune_nothing() {
        let candidate = p(&[inc(0), inc(1)]);
        assert!(!is_duplicate(&candidate, &[], &[]));
        assert!(!is_subset_of_any(&candidate, &[]));
        assert!(!is_superset_of_any(&candidate, &[]));
    }
}
