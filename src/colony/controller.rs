//! Search controller: the ant colony loop.
//!
//! Each iteration generates a candidate, drops it if it is too short, a
//! duplicate, or already implied by earlier results, validates it, and then
//! either rewards its directions (winner) or evaporates them (loser).

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::pattern::GradualPattern;
use crate::relations::BinaryRelationStore;
use crate::types::config::SearchConfig;
use crate::{GradacoError, GradacoResult};

use super::filter::{is_duplicate, is_subset_of_any, is_superset_of_any};
use super::generator::PatternGenerator;
use super::pheromone::PheromoneMatrix;
use super::validator::PatternValidator;

/// What happened to one generated candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Zero or one item. Never scored or stored.
    TooShort,
    /// Already seen, directly or after validation.
    Repeated,
    /// Superset of a loser or subset of a winner.
    Pruned,
    /// Validated pattern at or above the support threshold.
    Winner(GradualPattern),
    /// Pattern below the support threshold.
    Loser(GradualPattern),
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidates produced by the generator.
    pub generated: usize,
    /// Candidates with fewer than two items.
    pub too_short: usize,
    /// Candidates already known, before or after validation.
    pub repeated: usize,
    /// Candidates rejected by anti-monotonicity.
    pub pruned: usize,
    /// Patterns accepted as winners.
    pub winners: usize,
    /// Patterns filed as losers after scoring.
    pub losers: usize,
    /// Winners later dropped because a superset was accepted.
    pub superseded: usize,
}

/// Result of [`SearchController::run`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Winning patterns, none a subset of another.
    pub winners: Vec<GradualPattern>,
    /// Iterations actually performed.
    pub iteration_count: usize,
    pub stats: SearchStats,
}

/// Owns the pheromone matrix and the winner/loser lists of a search.
pub struct SearchController<'a, R: Rng = StdRng> {
    store: &'a BinaryRelationStore,
    config: SearchConfig,
    pheromones: PheromoneMatrix,
    generator: PatternGenerator<R>,
    validator: PatternValidator<'a>,
    winners: Vec<GradualPattern>,
    losers: Vec<GradualPattern>,
    iteration_count: usize,
    stats: SearchStats,
}

impl<'a> SearchController<'a, StdRng> {
    /// Creates a controller whose generator is seeded from `config.seed`.
    pub fn new(store: &'a BinaryRelationStore, config: SearchConfig) -> GradacoResult<Self> {
        let generator = PatternGenerator::from_seed(config.seed);
        Self::with_generator(store, config, generator)
    }
}

impl<'a, R: Rng> SearchController<'a, R> {
    /// Creates a controller drawing from the given RNG.
    pub fn with_rng(store: &'a BinaryRelationStore, config: SearchConfig, rng: R) -> GradacoResult<Self> {
        Self::with_generator(store, config, PatternGenerator::new(rng))
    }

    fn with_generator(
        store: &'a BinaryRelationStore,
        config: SearchConfig,
        generator: PatternGenerator<R>,
    ) -> GradacoResult<Self> {
        config.validate()?;
        if store.attributes().is_empty() {
            return Err(GradacoError::config("no attributes eligible for mining"));
        }
        Ok(Self {
            store,
            pheromones: PheromoneMatrix::new(store.attributes(), config.evaporation_factor),
            validator: PatternValidator::new(store, config.min_support),
            generator,
            config,
            winners: Vec::new(),
            losers: Vec::new(),
            iteration_count: 0,
            stats: SearchStats::default(),
        })
    }

    /// Runs the configured number of iterations from a fresh state.
    ///
    /// Returns an empty outcome, without iterating, when the store has no
    /// usable bins.
    pub fn run(&mut self) -> GradacoResult<SearchOutcome> {
        self.reset();

        if self.store.has_no_bins() {
            tracing::warn!("no usable bins in the data, skipping search");
            return Ok(self.outcome());
        }

        tracing::info!(
            attributes = self.store.attributes().len(),
            rows = self.store.row_count(),
            min_support = self.config.min_support,
            iterations = self.config.max_iterations,
            "search started"
        );

        while self.iteration_count < self.config.max_iterations {
            let candidate = self.generator.generate(&self.pheromones)?;
            self.stats.generated += 1;
            let outcome = self.evaluate_candidate(candidate)?;
            tracing::debug!(iteration = self.iteration_count, outcome = ?outcome, "candidate processed");
            self.iteration_count += 1;
        }

        tracing::info!(
            winners = self.winners.len(),
            losers = self.losers.len(),
            repeated = self.stats.repeated,
            pruned = self.stats.pruned,
            "search finished"
        );
        Ok(self.outcome())
    }

    /// Processes one generated candidate against the current state.
    pub fn evaluate_candidate(&mut self, candidate: GradualPattern) -> GradacoResult<StepOutcome> {
        if candidate.len() <= 1 {
            self.stats.too_short += 1;
            return Ok(StepOutcome::TooShort);
        }
        if is_duplicate(&candidate, &self.winners, &self.losers) {
            self.stats.repeated += 1;
            return Ok(StepOutcome::Repeated);
        }
        if is_superset_of_any(&candidate, &self.losers) || is_subset_of_any(&candidate, &self.winners) {
            self.stats.pruned += 1;
            return Ok(StepOutcome::Pruned);
        }

        let refined = self.validator.validate(&candidate)?.into_pattern();
        let superseded = !refined.same_items(&candidate);

        let outcome = if is_duplicate(&refined, &self.winners, &self.losers)
            || is_subset_of_any(&refined, &self.winners)
        {
            self.stats.repeated += 1;
            StepOutcome::Repeated
        } else if refined.support() >= self.config.min_support {
            self.pheromones.deposit(&refined);
            self.accept_winner(refined.clone());
            StepOutcome::Winner(refined)
        } else {
            self.pheromones.evaporate(&refined);
            self.stats.losers += 1;
            self.losers.push(refined.clone());
            StepOutcome::Loser(refined)
        };

        if superseded {
            self.losers.push(candidate);
        }
        Ok(outcome)
    }

    fn accept_winner(&mut self, pattern: GradualPattern) {
        let before = self.winners.len();
        self.winners
            .retain(|w| !is_subset_of_any(w, std::slice::from_ref(&pattern)));
        self.stats.superseded += before - self.winners.len();
        self.stats.winners += 1;
        self.winners.push(pattern);
    }

    fn reset(&mut self) {
        self.pheromones = PheromoneMatrix::new(self.store.attributes(), self.config.evaporation_factor);
        self.winners.clear();
        self.losers.clear();
        self.iteration_count = 0;
        self.stats = SearchStats::default();
    }

    fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            winners: self.winners.clone(),
            iteration_count: self.iteration_count,
            stats: self.stats,
        }
    }

    pub fn winners(&self) -> &[GradualPattern] {
        &self.winners
    }

    pub fn losers(&self) -> &[GradualPattern] {
        &self.losers
    }

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Iterations performed by the last [`run`](Self::run).
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
