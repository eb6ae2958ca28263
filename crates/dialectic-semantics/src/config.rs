//! Configuration for the gradual semantics solver
//!
//! Step size, convergence threshold and the iteration cap.

use crate::SolverError;
use serde::{Deserialize, Serialize};

/// Default RK4 step size
pub const DEFAULT_DELTA: f64 = 1e-2;

/// Default convergence threshold on the per-step change
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default cap on integration steps per solve
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Parameters of one integration run
///
/// # Examples
///
/// ```
/// use dialectic_semantics::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.delta, 1e-2);
/// assert_eq!(config.epsilon, 1e-4);
/// assert_eq!(config.max_iterations, 10_000);
///
/// let config = SolverConfig::from_toml("epsilon = 1e-6").unwrap();
/// assert_eq!(config.epsilon, 1e-6);
/// assert_eq!(config.delta, 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Fixed RK4 step size; must be finite and positive
    pub delta: f64,

    /// Stop once no strength moves more than this in one step
    pub epsilon: f64,

    /// Hard cap on steps; reaching it is reported as non-convergence
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// `delta = 1e-2`, `epsilon = 1e-4`, `max_iterations = 10_000`
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Create a configuration from explicit parameters
    pub fn new(delta: f64, epsilon: f64, max_iterations: usize) -> Self {
        Self {
            delta,
            epsilon,
            max_iterations,
        }
    }

    /// Tighter threshold and a larger cap, for results close to the fixed point
    pub fn precise() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            epsilon: 1e-7,
            max_iterations: 100_000,
        }
    }

    /// Coarser steps and threshold, for quick rankings on large graphs
    pub fn fast() -> Self {
        Self {
            delta: 1e-1,
            epsilon: 1e-3,
            max_iterations: 1_000,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "delta must be finite and greater than 0 (got {})",
                self.delta
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "epsilon must be finite and non-negative (got {})",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn from_toml(toml_str: &str) -> Result<Self, SolverError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SolverError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, SolverError> {
        toml::to_string_pretty(self)
            .map_err(|e| SolverError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
