//! Roulette-wheel selection over a cumulative distribution.

/// Picks the first candidate whose cumulative probability reaches `r`.
///
/// `cumulative` must be the running sums of the candidates' selection
/// probabilities, in the same order as `candidates`, ending at 1 (up to
/// floating-point error). The scan returns `candidates[i]` for the first
/// `i` with `r <= cumulative[i]`.
///
/// # Panics
///
/// Panics if no entry reaches `r`. With a well-formed distribution the
/// final entry is 1 and every draw `r` in `[0, 1]` lands; running off
/// the end means the caller handed in a degenerate distribution.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::roulette_pick;
///
/// let candidates = [7, 3, 9];
/// let cumulative = [0.5, 0.75, 1.0];
/// assert_eq!(roulette_pick(&candidates, &cumulative, 0.2), 7);
/// assert_eq!(roulette_pick(&candidates, &cumulative, 0.6), 3);
/// assert_eq!(roulette_pick(&candidates, &cumulative, 0.9), 9);
/// ```
pub fn roulette_pick(candidates: &[usize], cumulative: &[f64], r: f64) -> usize {
    debug_assert_eq!(candidates.len(), cumulative.len());
    for (&candidate, &bound) in candidates.iter().zip(cumulative.iter()) {
        if r <= bound {
            return candidate;
        }
    }
    panic!("roulette draw {r} exceeded the cumulative distribution");
}
