//! Colony configuration.

use crate::error::AcsError;
use serde::{Deserialize, Serialize};

/// Parameters of one ACS run.
///
/// Note the parameter roles: `alpha` is the pheromone decay and
/// reinforcement weight shared by the local and global updates, while
/// `rho` is the probability threshold selecting the greedy transition
/// rule over roulette exploration.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::AcsConfig;
///
/// let config = AcsConfig {
///     num_ants: 4,
///     max_iterations: 50,
///     ..AcsConfig::default()
/// };
/// assert!(config.validate(10).is_ok());
/// assert!(config.validate(2).is_err()); // num_ants > V
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcsConfig {
    /// Number of ants spawned per iteration. Must be within `1..=V`.
    pub num_ants: usize,
    /// Pheromone decay and reinforcement weight, within `[0, 1]`.
    pub alpha: f64,
    /// Heuristic exponent, non-negative.
    pub beta: f64,
    /// Exploitation probability threshold, within `[0, 1]`.
    pub rho: f64,
    /// Number of iterations per `run()` call, at least 1.
    pub max_iterations: usize,
}

impl Default for AcsConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            alpha: 0.1,
            beta: 2.5,
            rho: 0.9,
            max_iterations: 100,
        }
    }
}

impl AcsConfig {
    /// Checks every parameter against the given vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::Configuration`] naming the first offending
    /// parameter.
    pub fn validate(&self, vertex_count: usize) -> Result<(), AcsError> {
        if vertex_count < 2 {
            return Err(AcsError::Configuration {
                param: "vertex_count",
                value: vertex_count.to_string(),
                constraint: "at least 2",
            });
        }
        if self.num_ants < 1 || self.num_ants > vertex_count {
            return Err(AcsError::Configuration {
                param: "num_ants",
                value: self.num_ants.to_string(),
                constraint: "within 1..=V",
            });
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(AcsError::Configuration {
                param: "alpha",
                value: self.alpha.to_string(),
                constraint: "within [0, 1]",
            });
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcsError::Configuration {
                param: "beta",
                value: self.beta.to_string(),
                constraint: "non-negative",
            });
        }
        if !self.rho.is_finite() || !(0.0..=1.0).contains(&self.rho) {
            return Err(AcsError::Configuration {
                param: "rho",
                value: self.rho.to_string(),
                constraint: "within [0, 1]",
            });
        }
        if self.max_iterations < 1 {
            return Err(AcsError::Configuration {
                param: "max_iterations",
                value: self.max_iterations.to_string(),
                constraint: "at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AcsConfig::default().validate(52).is_ok());
    }

    #[test]
    fn test_rejects_tiny_graph() {
        let config = AcsConfig {
            num_ants: 1,
            ..AcsConfig::default()
        };
        assert!(config.validate(1).is_err());
        assert!(config.validate(0).is_err());
    }

    #[test]
    fn test_rejects_ant_count_out_of_range() {
        let mut config = AcsConfig::default();
        config.num_ants = 0;
        assert!(config.validate(10).is_err());
        config.num_ants = 11;
        assert!(config.validate(10).is_err());
        config.num_ants = 10;
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        let mut config = AcsConfig::default();
        config.alpha = -0.01;
        assert!(config.validate(10).is_err());
        config.alpha = 1.01;
        assert!(config.validate(10).is_err());
        config.alpha = f64::NAN;
        assert!(config.validate(10).is_err());
        config.alpha = 1.0;
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_rejects_negative_beta() {
        let mut config = AcsConfig::default();
        config.beta = -1.0;
        assert!(config.validate(10).is_err());
        config.beta = 0.0;
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_rejects_rho_out_of_range() {
        let mut config = AcsConfig::default();
        config.rho = 1.5;
        assert!(config.validate(10).is_err());
        config.rho = 0.0;
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let mut config = AcsConfig::default();
        config.max_iterations = 0;
        assert!(config.validate(10).is_err());
    }

    #[test]
    fn test_error_names_parameter() {
        let mut config = AcsConfig::default();
        config.rho = 2.0;
        let err = config.validate(10).expect_err("must fail");
        assert!(err.to_string().contains("rho"));
    }
}
