//! A single ant constructing one tour.

use rand::Rng;

use super::candidates::CandidateSet;
use super::pheromone::PheromoneField;
use super::selection::roulette_pick;
use crate::distance::{DistanceMatrix, HeuristicMatrix};

/// One ant building a closed tour step by step.
///
/// The ant walks a decide/advance cycle: [`decide`](Ant::decide) stages
/// the next vertex without moving, so the caller can apply the local
/// pheromone update on the staged edge before [`advance`](Ant::advance)
/// commits the move. After the last advance, [`close_tour`](Ant::close_tour)
/// adds the cost of the edge back to the start.
///
/// A staged transition is stored in `next`; before any decision (and
/// between advance and the following decide) it holds 0. The greedy rule
/// shares that sentinel: when every transition score is zero it leaves
/// `next` at 0, staging vertex 0 regardless of whether it is a candidate.
#[derive(Debug, Clone)]
pub struct Ant {
    start: usize,
    current: usize,
    next: usize,
    remaining: CandidateSet,
    route: Vec<usize>,
    cost: f64,
}

impl Ant {
    /// Places an ant at `start` with every other vertex of `vertices`
    /// left to visit, in the order `vertices` lists them.
    pub fn new(start: usize, vertices: &[usize]) -> Self {
        Self {
            start,
            current: start,
            next: 0,
            remaining: CandidateSet::excluding(vertices, start),
            route: vec![start],
            cost: 0.0,
        }
    }

    /// Stages the next vertex to visit without moving.
    ///
    /// Draws one uniform variate `r`; with `r <= rho` the greedy rule
    /// picks the unvisited vertex maximizing `τ·η^β` out of the current
    /// position, otherwise a second draw runs roulette selection over the
    /// same scores. Exploration therefore consumes two draws, greedy one.
    pub fn decide<R: Rng>(
        &mut self,
        pheromone: &PheromoneField,
        heuristic: &HeuristicMatrix,
        beta: f64,
        rho: f64,
        rng: &mut R,
    ) {
        let r = rng.random::<f64>();
        if r <= rho {
            self.exploit(pheromone, heuristic, beta);
        } else {
            self.explore(pheromone, heuristic, beta, rng);
        }
    }

    /// Greedy rule: stage the candidate with the strictly largest score.
    ///
    /// Ties keep the earliest candidate in iteration order. If every
    /// score is zero nothing beats the initial maximum and `next` stays
    /// at the sentinel 0.
    fn exploit(&mut self, pheromone: &PheromoneField, heuristic: &HeuristicMatrix, beta: f64) {
        let mut best = 0.0;
        self.next = 0;
        for candidate in self.remaining.iter() {
            let score = pheromone.get(self.current, candidate)
                * heuristic.get(self.current, candidate).powf(beta);
            if best < score {
                best = score;
                self.next = candidate;
            }
        }
    }

    /// Roulette rule: stage a candidate with probability proportional to
    /// its score.
    fn explore<R: Rng>(
        &mut self,
        pheromone: &PheromoneField,
        heuristic: &HeuristicMatrix,
        beta: f64,
        rng: &mut R,
    ) {
        let mut candidates = Vec::with_capacity(self.remaining.len());
        let mut scores = Vec::with_capacity(self.remaining.len());
        for candidate in self.remaining.iter() {
            candidates.push(candidate);
            scores.push(
                pheromone.get(self.current, candidate)
                    * heuristic.get(self.current, candidate).powf(beta),
            );
        }

        let total: f64 = scores.iter().sum();
        let mut cumulative = Vec::with_capacity(scores.len());
        let mut running = 0.0;
        for score in scores {
            running += score / total;
            cumulative.push(running);
        }

        let r = rng.random::<f64>();
        self.next = roulette_pick(&candidates, &cumulative, r);
    }

    /// Commits the staged transition: accumulates the edge cost, appends
    /// the vertex to the route, and marks it visited.
    ///
    /// # Panics
    ///
    /// Panics if the staged vertex is not an unvisited candidate, which
    /// can only follow a degenerate greedy decision that left the
    /// sentinel in place.
    pub fn advance(&mut self, distances: &DistanceMatrix) {
        let next = self.next;
        self.cost += distances.get(self.current, next);
        self.route.push(next);
        self.remaining.remove(next);
        self.current = next;
        self.next = 0;
    }

    /// Adds the closing edge from the current position back to the start.
    pub fn close_tour(&mut self, distances: &DistanceMatrix) {
        self.cost += distances.get(self.current, self.start);
    }

    /// The vertex the ant started from.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The vertex the ant currently sits on.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The staged next vertex (0 when nothing is staged).
    pub fn next(&self) -> usize {
        self.next
    }

    /// The route built so far, starting at the start vertex.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// The accumulated tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices still unvisited.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Consumes the ant, returning its route.
    pub fn into_route(self) -> Vec<usize> {
        self.route
    }
}
