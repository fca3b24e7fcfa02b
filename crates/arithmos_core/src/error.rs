use thiserror::Error;

/// Failures the engine can surface to callers.
///
/// Total operations (arithmetic, evaluation, derivative) have no variant
/// here: they cannot fail on well-formed inputs. Constructing a root
/// factor with a zero scale is a documented degeneracy (the zero
/// polynomial), not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    #[error("Newton iteration spent its budget of {max_iterations} steps without converging (|f(x)| = {residual})")]
    NonConvergence {
        max_iterations: usize,
        residual: f64,
    },

    #[error("initial state has {actual} components but the system declares dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
