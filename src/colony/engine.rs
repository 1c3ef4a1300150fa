//! The ACS colony engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ant::Ant;
use super::config::AcsConfig;
use super::pheromone::PheromoneField;
use crate::constructive::random_tour;
use crate::distance::{DistanceMatrix, HeuristicMatrix};
use crate::error::AcsError;
use crate::evaluation::tour_cost;
use crate::models::Solution;

/// An Ant Colony System solver for the symmetric TSP.
///
/// Construction seeds the pheromone field at `τ₀ = 1/cost` of a uniform
/// random tour, which also becomes the incumbent best. Each iteration of
/// [`run`](Colony::run) releases a batch of ants from distinct vertices
/// of the incumbent tour, walks them through `V − 1` synchronized
/// decide/advance steps with local pheromone updates on every committed
/// edge, then evaporates the whole field and reinforces the incumbent's
/// leading edges.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::{AcsConfig, Colony};
/// use acs_tsp::distance::{DistanceMatrix, HeuristicMatrix};
///
/// let dm = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0),
/// ]);
/// let eta = HeuristicMatrix::reciprocal(&dm);
/// let config = AcsConfig {
///     num_ants: 4,
///     max_iterations: 20,
///     ..AcsConfig::default()
/// };
///
/// let mut colony = Colony::seeded(config, dm, eta, 42).unwrap();
/// let best = colony.run();
/// assert!(best.is_permutation());
/// assert!(best.cost() >= 4.0); // unit square perimeter
/// ```
#[derive(Debug, Clone)]
pub struct Colony<R: Rng> {
    config: AcsConfig,
    distances: DistanceMatrix,
    heuristic: HeuristicMatrix,
    pheromone: PheromoneField,
    best_tour: Vec<usize>,
    best_cost: f64,
    rng: R,
}

impl Colony<ChaCha8Rng> {
    /// Creates a colony driven by a ChaCha8 generator seeded with `seed`.
    ///
    /// Runs with the same seed, instance, and configuration produce
    /// identical tours.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Colony::new`].
    pub fn seeded(
        config: AcsConfig,
        distances: DistanceMatrix,
        heuristic: HeuristicMatrix,
        seed: u64,
    ) -> Result<Self, AcsError> {
        Self::new(config, distances, heuristic, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Colony<R> {
    /// Creates a colony over the given instance.
    ///
    /// Draws `V − 1` variates from `rng` for the initial random tour.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::Configuration`] if a parameter fails
    /// [`AcsConfig::validate`] against the instance size, or
    /// [`AcsError::MatrixMismatch`] if the heuristic matrix disagrees
    /// with the distance matrix on the vertex count.
    pub fn new(
        config: AcsConfig,
        distances: DistanceMatrix,
        heuristic: HeuristicMatrix,
        mut rng: R,
    ) -> Result<Self, AcsError> {
        config.validate(distances.size())?;
        if heuristic.size() != distances.size() {
            return Err(AcsError::MatrixMismatch {
                distances: distances.size(),
                heuristic: heuristic.size(),
            });
        }

        let best_tour = random_tour(distances.size(), &mut rng);
        let best_cost = tour_cost(&best_tour, &distances);
        let pheromone = PheromoneField::new(distances.size(), best_cost.recip());

        Ok(Self {
            config,
            distances,
            heuristic,
            pheromone,
            best_tour,
            best_cost,
            rng,
        })
    }

    /// Runs `max_iterations` iterations and returns the best solution
    /// found so far.
    ///
    /// Calling `run` again continues from the current pheromone field
    /// and incumbent, so successive calls never regress.
    pub fn run(&mut self) -> Solution {
        for _ in 0..self.config.max_iterations {
            self.iterate();
        }
        self.solution()
    }

    fn iterate(&mut self) {
        let steps = self.distances.size() - 1;
        let mut ants = self.spawn_ants();

        for _ in 0..steps {
            for ant in &mut ants {
                ant.decide(
                    &self.pheromone,
                    &self.heuristic,
                    self.config.beta,
                    self.config.rho,
                    &mut self.rng,
                );
            }
            for ant in &mut ants {
                self.pheromone
                    .local_update(ant.current(), ant.next(), self.config.alpha);
                ant.advance(&self.distances);
            }
        }

        for ant in &mut ants {
            ant.close_tour(&self.distances);
        }

        // Ties resolve to the earliest ant.
        let mut best = 0;
        for (i, ant) in ants.iter().enumerate().skip(1) {
            if ant.cost() < ants[best].cost() {
                best = i;
            }
        }
        if ants[best].cost() < self.best_cost {
            self.best_cost = ants[best].cost();
            self.best_tour = ants[best].route().to_vec();
        }

        self.global_update();
    }

    /// Releases `num_ants` ants from distinct vertices of the incumbent
    /// tour, sampled without replacement.
    ///
    /// Each ant's unvisited candidates keep the incumbent tour's vertex
    /// order, which fixes the greedy tie-break and roulette scan order.
    fn spawn_ants(&mut self) -> Vec<Ant> {
        let mut starts = self.best_tour.clone();
        let mut ants = Vec::with_capacity(self.config.num_ants);
        for i in 0..self.config.num_ants {
            let j = self.rng.random_range(i as u64..starts.len() as u64) as usize;
            starts.swap(i, j);
            ants.push(Ant::new(starts[i], &self.best_tour));
        }
        ants
    }

    /// Evaporates the whole field and reinforces the incumbent tour's
    /// leading edges with `α/cost` each.
    ///
    /// The reinforced edges are those entering interior vertices of the
    /// tour sequence; the final edge and the closing edge are left to
    /// evaporation alone.
    fn global_update(&mut self) {
        self.pheromone.evaporate(self.config.alpha);
        let delta = self.best_cost.recip();
        for i in 1..self.best_tour.len() - 1 {
            self.pheromone.deposit(
                self.best_tour[i - 1],
                self.best_tour[i],
                self.config.alpha * delta,
            );
        }
    }

    /// The best tour found so far.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// The cost of the best tour found so far.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// The current pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// The colony configuration.
    pub fn config(&self) -> &AcsConfig {
        &self.config
    }

    /// The best tour and cost as a [`Solution`].
    pub fn solution(&self) -> Solution {
        Solution::new(self.best_tour.clone(), self.best_cost)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any seed and any valid ant count yield a permutation whose
        /// cost the incumbent tracks exactly.
        #[test]
        fn prop_run_yields_consistent_incumbent(seed in 0u64..500, num_ants in 1usize..=5) {
            let dm = DistanceMatrix::from_points(&[
                (0.0, 0.0), (2.0, 1.0), (4.0, 0.5), (1.0, 3.0), (3.0, 4.0),
            ]);
            let eta = HeuristicMatrix::reciprocal(&dm);
            let config = AcsConfig {
                num_ants,
                max_iterations: 3,
                ..AcsConfig::default()
            };
            let mut colony = Colony::seeded(config, dm.clone(), eta, seed).expect("valid instance");
            let initial = colony.best_cost();
            let best = colony.run();

            prop_assert!(best.is_permutation());
            prop_assert!(best.cost() <= initial);
            prop_assert!((best.cost() - tour_cost(best.tour(), &dm)).abs() < 1e-9);
        }
    }
}
