//! Closed-tour cost evaluation.

use crate::distance::DistanceMatrix;

/// Computes the total cost of a closed tour.
///
/// Sums the distances of consecutive edges and the closing edge from the
/// last vertex back to the first. A tour of fewer than two vertices has
/// zero cost.
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::evaluation::tour_cost;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 3.0,
///     2.0, 3.0, 0.0,
/// ]).unwrap();
/// // 0→1 (1) + 1→2 (3) + 2→0 (2)
/// assert_eq!(tour_cost(&[0, 1, 2], &dm), 6.0);
/// ```
pub fn tour_cost(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }

    let mut cost = 0.0;
    for i in 0..tour.len() - 1 {
        cost += distances.get(tour[i], tour[i + 1]);
    }
    cost += distances.get(tour[tour.len() - 1], tour[0]);
    cost
}
