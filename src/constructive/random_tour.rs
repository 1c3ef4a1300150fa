//! Uniform random tour construction.

use rand::Rng;

/// Builds a uniform random tour over `n` vertices.
///
/// Returns a permutation of `0..n` produced by a Fisher-Yates shuffle,
/// consuming exactly `n - 1` draws from `rng` (zero draws for `n <= 1`).
///
/// # Examples
///
/// ```
/// use acs_tsp::constructive::random_tour;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let tour = random_tour(5, &mut rng);
/// let mut sorted = tour.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();

    // Fisher-Yates shuffle
    for i in (1..tour.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        tour.swap(i, j);
    }

    tour
}
