//! Pheromone trail matrix.

/// A dense n×n matrix of directed pheromone trail intensities, stored
/// row-major, plus the baseline level it was initialized with.
///
/// The field starts symmetric (every entry at the baseline τ₀) but only
/// directed edges are updated afterwards, so symmetry is not maintained.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::PheromoneField;
///
/// let mut tau = PheromoneField::new(3, 0.5);
/// assert_eq!(tau.get(0, 1), 0.5);
///
/// tau.deposit(0, 1, 0.25);
/// assert_eq!(tau.get(0, 1), 0.75);
/// assert_eq!(tau.get(1, 0), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
    baseline: f64,
}

impl PheromoneField {
    /// Creates a field of the given size with every entry at `baseline`.
    ///
    /// The diagonal is filled too; it is never read by the solver.
    pub fn new(size: usize, baseline: f64) -> Self {
        Self {
            data: vec![baseline; size * size],
            size,
            baseline,
        }
    }

    /// The baseline level τ₀ the field was initialized with.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Returns the trail intensity of the directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Pulls the directed edge `from → to` toward the baseline:
    /// `τ ← (1 − alpha)·τ + alpha·τ₀`.
    ///
    /// For `alpha` in `[0, 1]` the result is a convex combination, so it
    /// lies between the old value and the baseline.
    pub fn local_update(&mut self, from: usize, to: usize, alpha: f64) {
        let idx = from * self.size + to;
        self.data[idx] = (1.0 - alpha) * self.data[idx] + alpha * self.baseline;
    }

    /// Evaporates every entry by the factor `1 − alpha`.
    pub fn evaporate(&mut self, alpha: f64) {
        for entry in &mut self.data {
            *entry *= 1.0 - alpha;
        }
    }

    /// Adds `amount` to the directed edge `from → to`.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Number of vertices in this field.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fill() {
        let tau = PheromoneField::new(4, 0.125);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(tau.get(i, j), 0.125);
            }
        }
        assert_eq!(tau.baseline(), 0.125);
        assert_eq!(tau.size(), 4);
    }

    #[test]
    fn test_local_update_moves_toward_baseline() {
        let mut tau = PheromoneField::new(2, 0.5);
        tau.deposit(0, 1, 1.5); // entry now 2.0
        tau.local_update(0, 1, 0.1);
        // (1 - 0.1) * 2.0 + 0.1 * 0.5 = 1.85
        assert!((tau.get(0, 1) - 1.85).abs() < 1e-12);
    }

    #[test]
    fn test_local_update_extremes() {
        let mut tau = PheromoneField::new(2, 0.5);
        tau.deposit(0, 1, 1.5);
        let before = tau.get(0, 1);

        let mut frozen = tau.clone();
        frozen.local_update(0, 1, 0.0);
        assert_eq!(frozen.get(0, 1), before);

        let mut reset = tau.clone();
        reset.local_update(0, 1, 1.0);
        assert_eq!(reset.get(0, 1), 0.5);
    }

    #[test]
    fn test_local_update_is_directed() {
        let mut tau = PheromoneField::new(2, 0.5);
        tau.deposit(0, 1, 1.0);
        tau.deposit(1, 0, 1.0);
        tau.local_update(0, 1, 0.5);
        assert!((tau.get(0, 1) - 1.0).abs() < 1e-12);
        assert_eq!(tau.get(1, 0), 1.5);
    }

    #[test]
    fn test_evaporate_uniform_factor() {
        let mut tau = PheromoneField::new(3, 1.0);
        tau.deposit(1, 2, 1.0); // entry now 2.0
        tau.evaporate(0.25);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if (i, j) == (1, 2) { 1.5 } else { 0.75 };
                assert!((tau.get(i, j) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_repeated_local_update_converges_to_baseline() {
        let mut tau = PheromoneField::new(2, 0.5);
        tau.deposit(0, 1, 10.0);
        for _ in 0..200 {
            tau.local_update(0, 1, 0.2);
        }
        assert!((tau.get(0, 1) - 0.5).abs() < 1e-9);
    }
}
