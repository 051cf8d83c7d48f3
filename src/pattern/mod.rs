//! Gradual item and gradual pattern model.
//!
//! A [`GradualItem`] states that one attribute increases or decreases; a
//! [`GradualPattern`] is a set of such items hypothesised to co-occur, with
//! the support measured by the validator.

mod gradual;
mod item;

pub use gradual::GradualPattern;
pub use item::{Direction, GradualItem};
