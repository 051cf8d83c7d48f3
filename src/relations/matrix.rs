//! Boolean row-pair matrices stored as packed bits.

use serde::{Deserialize, Serialize};

use crate::{GradacoError, GradacoResult};

const WORD_BITS: usize = u64::BITS as usize;

/// An `n x n` boolean matrix over row-pairs.
///
/// Entry `(i, j)` is true iff rows `i` and `j` satisfy the relation of the
/// gradual item the matrix belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRelationMatrix")]
pub struct RelationMatrix {
    rows: usize,
    words: Vec<u64>,
}

/// Unchecked wire form of [`RelationMatrix`].
#[derive(Deserialize)]
struct RawRelationMatrix {
    rows: usize,
    words: Vec<u64>,
}

impl TryFrom<RawRelationMatrix> for RelationMatrix {
    type Error = GradacoError;

    fn try_from(raw: RawRelationMatrix) -> GradacoResult<Self> {
        let bits = raw.rows.checked_mul(raw.rows).ok_or_else(|| {
            GradacoError::data(format!("a {}-row matrix is too large", raw.rows))
        })?;
        let expected = bits.div_ceil(WORD_BITS);
        if raw.words.len() != expected {
            return Err(GradacoError::data(format!(
                "a {}-row matrix needs {} words, got {}",
                raw.rows,
                expected,
                raw.words.len()
            )));
        }
        let tail = bits % WORD_BITS;
        if tail != 0 {
            if let Some(last) = raw.words.last() {
                if last >> tail != 0 {
                    return Err(GradacoError::data(format!(
                        "a {}-row matrix has bits set past its last cell",
                        raw.rows
                    )));
                }
            }
        }
        Ok(Self {
            rows: raw.rows,
            words: raw.words,
        })
    }
}

impl RelationMatrix {
    /// Creates an all-false matrix for `rows` rows.
    pub fn new(rows: usize) -> Self {
        let bits = rows * rows;
        Self {
            rows,
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut matrix = Self::new(rows);
        for i in 0..rows {
            for j in 0..rows {
                if f(i, j) {
                    matrix.set(i, j, true);
                }
            }
        }
        matrix
    }

    /// Creates a matrix with exactly the listed `(i, j)` entries set.
    pub fn from_pairs<I>(rows: usize, pairs: I) -> GradacoResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = Self::new(rows);
        for (i, j) in pairs {
            if i >= rows || j >= rows {
                return Err(GradacoError::data(format!(
                    "pair ({}, {}) is outside a {}-row matrix",
                    i, j, rows
                )));
            }
            matrix.set(i, j, true);
        }
        Ok(matrix)
    }

    /// Number of rows (and columns).
    pub fn rows(&self) -> usize {
        self.rows
    }

    // callers keep `i` and `j` below `rows`
    fn set(&mut self, i: usize, j: usize, value: bool) {
        debug_assert!(i < self.rows && j < self.rows);
        let bit = i * self.rows + j;
        let mask = 1u64 << (bit % WORD_BITS);
        if value {
            self.words[bit / WORD_BITS] |= mask;
        } else {
            self.words[bit / WORD_BITS] &= !mask;
        }
    }

    /// Reads entry `(i, j)`; out-of-range indices read as false.
    pub fn get(&self, i: usize, j: usize) -> bool {
        if i >= self.rows || j >= self.rows {
            return false;
        }
        let bit = i * self.rows + j;
        self.words[bit / WORD_BITS] & (1u64 << (bit % WORD_BITS)) != 0
    }

    /// Number of true entries.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Element-wise AND, returning a new matrix.
    pub fn and(&self, other: &RelationMatrix) -> GradacoResult<RelationMatrix> {
        if self.rows != other.rows {
            return Err(GradacoError::data(format!(
                "cannot combine a {}-row matrix with a {}-row matrix",
                self.rows, other.rows
            )));
        }
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        Ok(RelationMatrix {
            rows: self.rows,
            words,
        })
    }

    /// Fraction of the `n(n-1)/2` row-pairs with a true entry.
    pub fn support(&self) -> f64 {
        let pairs = pair_count(self.rows);
        if pairs == 0 {
            return 0.0;
        }
        self.count_ones() as f64 / pairs as f64
    }
}

/// Number of unordered row-pairs for `rows` rows.
pub fn pair_count(rows: usize) -> usize {
    rows * rows.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut m = RelationMatrix::new(9);
        m.set(0, 8, true);
        m.set(8, 0, true);
        m.set(4, 4, true);
        m.set(4, 4, false);
        assert!(m.get(0, 8));
        assert!(m.get(8, 0));
        assert!(!m.get(4, 4));
        assert!(!m.get(9, 0));
        assert_eq!(m.count_ones(), 2);
    }

    #[test]
    fn test_and_intersects() {
        let a = RelationMatrix::from_fn(10, |i, j| i < j);
        let b = RelationMatrix::from_fn(10, |i, j| i < j && j % 2 == 0);
        let c = a.and(&b).unwrap();
        assert_eq!(c, b);
        // `a` is left untouched
        assert_eq!(a.count_ones(), 45);
    }

    #[test]
    fn test_and_rejects_mismatched_sizes() {
        let a = RelationMatrix::new(3);
        let b = RelationMatrix::new(4);
        assert!(matches!(a.and(&b), Err(GradacoError::DataUnavailable(_))));
    }

    #[test]
    fn test_support_uses_pair_count() {
        let full = RelationMatrix::from_fn(10, |i, j| i < j);
        assert_eq!(full.support(), 1.0);

        let half = RelationMatrix::from_pairs(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(half.support(), 0.5);

        assert_eq!(RelationMatrix::new(1).support(), 0.0);
    }

    #[test]
    fn test_from_pairs_rejects_out_of_range() {
        assert!(RelationMatrix::from_pairs(3, [(0, 3)]).is_err());
    }

    #[test]
    fn test_from_pairs_never_wraps_into_next_row() {
        // (1, 3) would alias (2, 0) in a 3-row layout
        assert!(RelationMatrix::from_pairs(3, [(1, 3)]).is_err());
        let m = RelationMatrix::from_pairs(3, [(1, 2)]).unwrap();
        assert!(!m.get(2, 0));
        assert_eq!(m.count_ones(), 1);
    }

    #[test]
    fn test_deserialize_accepts_serialized_matrix() {
        let m = RelationMatrix::from_fn(9, |i, j| i < j);
        let json = serde_json::to_string(&m).unwrap();
        let back: RelationMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.support(), 1.0);
    }

    #[test]
    fn test_deserialize_rejects_wrong_word_count() {
        let short = serde_json::from_str::<RelationMatrix>(r#"{"rows":10,"words":[]}"#);
        assert!(short.is_err());
        let long = serde_json::from_str::<RelationMatrix>(r#"{"rows":2,"words":[0,0]}"#);
        assert!(long.is_err());
    }

    #[test]
    fn test_deserialize_rejects_bits_past_last_cell() {
        // 2 rows use the low 4 bits of a single word
        let stray = format!(r#"{{"rows":2,"words":[{}]}}"#, u64::MAX);
        assert!(serde_json::from_str::<RelationMatrix>(&stray).is_err());
        let ok = serde_json::from_str::<RelationMatrix>(r#"{"rows":2,"words":[2]}"#).unwrap();
        assert!(ok.get(0, 1));
        assert_eq!(ok.support(), 1.0);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(10), 45);
    }
}
