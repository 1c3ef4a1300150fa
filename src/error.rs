//! Error types for ACS construction and instance loading.

/// Errors surfaced by colony construction and instance ingestion.
///
/// Internal invariant violations (an empty candidate set mid-step, a
/// committed vertex that is not an active candidate) are bugs, not
/// recoverable conditions; those panic instead of returning a variant.
///
/// # Examples
///
/// ```
/// use acs_tsp::error::AcsError;
///
/// let err = AcsError::Configuration {
///     param: "alpha",
///     value: "1.5".to_string(),
///     constraint: "within [0, 1]",
/// };
/// assert!(err.to_string().contains("alpha"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AcsError {
    /// A construction parameter is outside its valid range.
    #[error("invalid {param} = {value}: must be {constraint}")]
    Configuration {
        /// Parameter name.
        param: &'static str,
        /// Rejected value, rendered as text.
        value: String,
        /// Constraint description.
        constraint: &'static str,
    },

    /// Distance and heuristic matrices disagree on the vertex count.
    #[error("matrix size mismatch: distance is {distances}x{distances}, heuristic is {heuristic}x{heuristic}")]
    MatrixMismatch {
        /// Distance matrix side length.
        distances: usize,
        /// Heuristic matrix side length.
        heuristic: usize,
    },

    /// Reading an instance file failed.
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    /// A coordinate line in an instance file could not be parsed.
    #[error("malformed coordinate line {line}: {content:?}")]
    Parse {
        /// 1-based line number in the file.
        line: usize,
        /// The offending line content.
        content: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = AcsError::Configuration {
            param: "num_ants",
            value: "0".to_string(),
            constraint: "within 1..=V",
        };
        let msg = err.to_string();
        assert!(msg.contains("num_ants"));
        assert!(msg.contains("1..=V"));
    }

    #[test]
    fn test_matrix_mismatch_display() {
        let err = AcsError::MatrixMismatch {
            distances: 5,
            heuristic: 4,
        };
        assert!(err.to_string().contains("5x5"));
        assert!(err.to_string().contains("4x4"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AcsError::from(io);
        assert!(matches!(err, AcsError::Io(_)));
    }

    #[test]
    fn test_parse_display() {
        let err = AcsError::Parse {
            line: 7,
            content: "1 abc 2.0".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
