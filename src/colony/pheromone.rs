//! Pheromone matrix steering pattern generation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::pattern::{Direction, GradualPattern};
use crate::{GradacoError, GradacoResult};

/// Pheromone weights of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PheromoneTrail {
    /// Affinity for an increasing item.
    pub plus: f64,
    /// Affinity for a decreasing item.
    pub minus: f64,
    /// Affinity for leaving the attribute out.
    pub absence: f64,
}

impl Default for PheromoneTrail {
    fn default() -> Self {
        Self {
            plus: 1.0,
            minus: 1.0,
            absence: 1.0,
        }
    }
}

impl PheromoneTrail {
    pub fn total(&self) -> f64 {
        self.plus + self.minus + self.absence
    }

    fn weight_mut(&mut self, direction: Direction) -> &mut f64 {
        match direction {
            Direction::Increasing => &mut self.plus,
            Direction::Decreasing => &mut self.minus,
        }
    }
}

/// Per-attribute pheromone weights for one search run.
///
/// Weights start at `(1, 1, 1)` and stay strictly positive: evaporation
/// scales a weight down but floors it at [`f64::MIN_POSITIVE`].
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    attributes: Vec<usize>,
    positions: HashMap<usize, usize>,
    trails: Vec<PheromoneTrail>,
    evaporation_factor: f64,
}

impl PheromoneMatrix {
    /// Creates a fresh matrix over the given attributes.
    pub fn new(attributes: &[usize], evaporation_factor: f64) -> Self {
        let mut positions = HashMap::with_capacity(attributes.len());
        let mut unique = Vec::with_capacity(attributes.len());
        for &attribute in attributes {
            if !positions.contains_key(&attribute) {
                positions.insert(attribute, unique.len());
                unique.push(attribute);
            }
        }
        Self {
            trails: vec![PheromoneTrail::default(); unique.len()],
            attributes: unique,
            positions,
            evaporation_factor,
        }
    }

    /// Attributes covered by the matrix.
    pub fn attributes(&self) -> &[usize] {
        &self.attributes
    }

    /// Weights of `attribute`, if it is in the search space.
    pub fn trail(&self, attribute: usize) -> Option<&PheromoneTrail> {
        self.positions.get(&attribute).map(|&i| &self.trails[i])
    }

    fn trail_mut(&mut self, attribute: usize) -> Option<&mut PheromoneTrail> {
        let i = *self.positions.get(&attribute)?;
        Some(&mut self.trails[i])
    }

    /// Reinforces a supported pattern.
    ///
    /// Each item's direction gains 1; every attribute the pattern does not
    /// use gains 1 on absence.
    pub fn deposit(&mut self, pattern: &GradualPattern) {
        for item in pattern.items() {
            if let Some(trail) = self.trail_mut(item.attribute) {
                *trail.weight_mut(item.direction) += 1.0;
            }
        }
        for i in 0..self.attributes.len() {
            if !pattern.uses_attribute(self.attributes[i]) {
                self.trails[i].absence += 1.0;
            }
        }
    }

    /// Decays the directions of an unsupported pattern. Absence is untouched.
    pub fn evaporate(&mut self, pattern: &GradualPattern) {
        let keep = 1.0 - self.evaporation_factor;
        for item in pattern.items() {
            if let Some(trail) = self.trail_mut(item.attribute) {
                let weight = trail.weight_mut(item.direction);
                *weight = (*weight * keep).max(f64::MIN_POSITIVE);
            }
        }
    }

    /// Cumulative sampling thresholds `(p_pos, p_boundary)` for `attribute`.
    ///
    /// A draw below `p_pos` picks `+`, one below `p_boundary` picks `-`,
    /// anything else leaves the attribute out.
    pub fn probabilities(&self, attribute: usize) -> GradacoResult<(f64, f64)> {
        let trail = self.trail(attribute).ok_or_else(|| {
            GradacoError::other(format!("attribute {} is not in the search space", attribute))
        })?;
        let total = trail.total();
        if !(total.is_finite() && total > 0.0) {
            return Err(GradacoError::PheromoneInvariant { attribute, total });
        }
        Ok((trail.plus / total, (trail.plus + trail.minus) / total))
    }

    /// True when every weight is strictly positive and finite.
    pub fn is_positive(&self) -> bool {
        self.trails.iter().all(|t| {
            [t.plus, t.minus, t.absence]
                .iter()
                .all(|w| w.is_finite() && *w > 0.0)
        })
    }
}
