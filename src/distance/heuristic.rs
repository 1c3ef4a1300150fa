//! Heuristic desirability matrix.

use super::DistanceMatrix;

/// A dense n×n matrix of per-edge desirability scores, stored row-major.
///
/// Conventionally the reciprocal of the distance matrix: short edges are
/// desirable. Entries where the distance is zero (the diagonal, or
/// coincident vertices) are zero, so they contribute nothing to transition
/// scores.
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::{DistanceMatrix, HeuristicMatrix};
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).unwrap();
/// let eta = HeuristicMatrix::reciprocal(&dm);
/// assert_eq!(eta.get(0, 1), 0.25);
/// assert_eq!(eta.get(0, 0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    /// Builds the reciprocal-distance heuristic: `1/d` where `d != 0`,
    /// zero elsewhere.
    pub fn reciprocal(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let d = distances.get(i, j);
                data.push(if d != 0.0 { d.recip() } else { 0.0 });
            }
        }
        Self { data, size: n }
    }

    /// Creates a heuristic matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the desirability of the edge from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
