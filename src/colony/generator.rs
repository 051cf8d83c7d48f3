//! Stochastic construction of candidate patterns.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::pattern::{GradualItem, GradualPattern};
use crate::GradacoResult;

use super::pheromone::PheromoneMatrix;

/// Samples one direction (or absence) per attribute, weighted by pheromone.
pub struct PatternGenerator<R: Rng = StdRng> {
    rng: R,
}

impl PatternGenerator<StdRng> {
    /// Creates a generator, seeded when `seed` is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> PatternGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Builds one candidate.
    ///
    /// Attributes are visited in a fresh random order. For each one a draw
    /// `x` in (0, 1) yields `+` below `p_pos`, `-` below `p_boundary` and no
    /// item otherwise. The result may hold zero or one item.
    pub fn generate(&mut self, pheromones: &PheromoneMatrix) -> GradacoResult<GradualPattern> {
        let mut order = pheromones.attributes().to_vec();
        order.shuffle(&mut self.rng);

        let mut pattern = GradualPattern::new();
        for attribute in order {
            let (p_pos, p_boundary) = pheromones.probabilities(attribute)?;
            let x: f64 = self.rng.sample(Open01);
            if x < p_pos {
                pattern.add_item(GradualItem::increasing(attribute));
            } else if x < p_boundary {
                pattern.add_item(GradualItem::decreasing(attribute));
            }
        }
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Direction;

    fn generator(seed: u64) -> PatternGenerator {
        PatternGenerator::from_seed(Some(seed))
    }

    #[test]
    fn test_items_stay_in_search_space() {
        let pheromones = PheromoneMatrix::new(&[1, 3, 5], 0.5);
        let mut gen = generator(11);
        for _ in 0..200 {
            let p = gen.generate(&pheromones).unwrap();
            assert!(p.len() <= 3);
            assert!(p.attributes().all(|a| [1, 3, 5].contains(&a)));
        }
    }

    #[test]
    fn test_same_seed_same_candidates() {
        let pheromones = PheromoneMatrix::new(&[0, 1, 2, 3], 0.5);
        let mut a = generator(42);
        let mut b = generator(42);
        for _ in 0..20 {
            assert_eq!(a.generate(&pheromones).unwrap(), b.generate(&pheromones).unwrap());
        }
    }

    #[test]
    fn test_deposit_biases_towards_direction() {
        let mut pheromones = PheromoneMatrix::new(&[0, 1], 0.5);
        let favourite = GradualPattern::from_items([GradualItem::increasing(0), GradualItem::increasing(1)]);
        for _ in 0..50 {
            pheromones.deposit(&favourite);
        }

        let mut gen = generator(3);
        let mut plus = 0;
        let mut other = 0;
        for _ in 0..500 {
            for item in gen.generate(&pheromones).unwrap().items() {
                match item.direction {
                    Direction::Increasing => plus += 1,
                    Direction::Decreasing => other += 1,
                }
            }
        }
        assert!(plus > other * 5);
        // exploration never fully stops
        assert!(other > 0);
    }

    #[test]
    fn test_uniform_weights_reach_every_outcome() {
        let pheromones = PheromoneMatrix::new(&[0], 0.5);
        let mut gen = generator(9);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let p = gen.generate(&pheromones).unwrap();
            match p.items().first().map(|i| i.direction) {
                Some(Direction::Increasing) => seen[0] = true,
                Some(Direction::Decreasing) => seen[1] = true,
                None => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }
}
