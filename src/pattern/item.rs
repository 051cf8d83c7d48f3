//! Gradual items: an attribute paired with a direction of variation.

use serde::{Deserialize, Serialize};

/// Direction in which an attribute varies across a row-pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// The attribute grows from the first row to the second.
    #[serde(rename = "+")]
    Increasing,
    /// The attribute shrinks from the first row to the second.
    #[serde(rename = "-")]
    Decreasing,
}

impl Direction {
    /// Both directions, `+` first.
    pub const ALL: [Direction; 2] = [Direction::Increasing, Direction::Decreasing];

    /// Returns the opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }

    /// Conventional symbol, `+` or `-`.
    pub fn symbol(self) -> char {
        match self {
            Direction::Increasing => '+',
            Direction::Decreasing => '-',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An `(attribute, direction)` pair.
///
/// Items are plain values: equality, ordering and hashing are structural, so
/// an item doubles as the key of its relation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GradualItem {
    /// Column index in the source table.
    pub attribute: usize,
    /// Direction of variation.
    pub direction: Direction,
}

impl GradualItem {
    /// Creates a new item.
    pub fn new(attribute: usize, direction: Direction) -> Self {
        Self {
            attribute,
            direction,
        }
    }

    /// Shorthand for an increasing item.
    pub fn increasing(attribute: usize) -> Self {
        Self::new(attribute, Direction::Increasing)
    }

    /// Shorthand for a decreasing item.
    pub fn decreasing(attribute: usize) -> Self {
        Self::new(attribute, Direction::Decreasing)
    }

    /// Same attribute, flipped direction.
    pub fn inverse(self) -> Self {
        Self::new(self.attribute, self.direction.inverse())
    }
}

impl std::fmt::Display for GradualItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.attribute, self.direction)
    }
}
