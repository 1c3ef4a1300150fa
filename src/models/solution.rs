//! Tour solution record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed tour and its total cost.
///
/// The tour is an ordered sequence of vertex indices; the edge from the
/// last vertex back to the first is implicit, and its distance is already
/// included in `cost`.
///
/// # Examples
///
/// ```
/// use acs_tsp::models::Solution;
///
/// let sol = Solution::new(vec![0, 2, 1, 3], 8.5);
/// assert_eq!(sol.tour(), &[0, 2, 1, 3]);
/// assert_eq!(sol.cost(), 8.5);
/// assert!(sol.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    tour: Vec<usize>,
    cost: f64,
}

impl Solution {
    /// Creates a solution from a tour and its closed-tour cost.
    pub fn new(tour: Vec<usize>, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The tour as a vertex sequence.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Total cost of the tour, closing edge included.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Returns `true` if the tour visits every vertex in `[0, len)`
    /// exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.tour.len();
        let mut seen = vec![false; n];
        for &v in &self.tour {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// Consumes the solution, returning the tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance: {}\nSolution: {:?}", self.cost, self.tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let sol = Solution::new(vec![1, 0, 2], 4.0);
        assert_eq!(sol.tour(), &[1, 0, 2]);
        assert_eq!(sol.cost(), 4.0);
        assert_eq!(sol.len(), 3);
        assert!(!sol.is_empty());
    }

    #[test]
    fn test_permutation_check() {
        assert!(Solution::new(vec![2, 0, 1], 0.0).is_permutation());
        assert!(!Solution::new(vec![0, 0, 1], 0.0).is_permutation());
        assert!(!Solution::new(vec![0, 1, 3], 0.0).is_permutation());
        assert!(Solution::new(vec![], 0.0).is_permutation());
    }

    #[test]
    fn test_display_format() {
        let sol = Solution::new(vec![0, 1, 2], 6.0);
        let text = sol.to_string();
        assert!(text.starts_with("Distance: 6"));
        assert!(text.contains("Solution: [0, 1, 2]"));
    }

    #[test]
    fn test_into_tour() {
        let sol = Solution::new(vec![3, 1, 0, 2], 10.0);
        assert_eq!(sol.into_tour(), vec![3, 1, 0, 2]);
    }
}
