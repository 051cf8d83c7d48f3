//! Binary relation store.
//!
//! For every attribute and direction the store holds a boolean matrix over
//! row-pairs telling whether the pair follows that direction. The search only
//! reads it; building it belongs to the dataset side.

mod matrix;
mod store;

pub use matrix::{pair_count, RelationMatrix};
pub use store::{BinaryRelationStore, StoreBuilder};
