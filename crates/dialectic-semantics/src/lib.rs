//! Dialectic Semantics
//!
//! Gradual (continuous-valued) semantics for bipolar argumentation graphs.
//!
//! # Overview
//!
//! Each argument's strength is a state variable pulled toward a target that
//! depends on its base score and on the DF-QuAD aggregate of its attackers'
//! and supporters' current strengths:
//!
//! | Net influence `i` | Target |
//! |-------------------|--------|
//! | `i >= 0` | `base + (1 - base) * i` |
//! | `i < 0` | `base + base * i` |
//!
//! The whole strength vector is integrated with a fixed-step RK4 scheme until
//! no component moves more than `epsilon` in one step, or until the iteration
//! cap is hit. Hitting the cap is reported through [`SolveStatus`], not as an
//! error.
//!
//! # Usage
//!
//! ```
//! use dialectic_domain::{BipolarGraph, RelationKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = BipolarGraph::new();
//! graph.add_default_argument("a", "A")?;
//! graph.add_default_argument("b", "B")?;
//! graph.add_relation("a", "b", RelationKind::Attack)?;
//!
//! let outcome = dialectic_semantics::solve(&mut graph, 1e-2, 1e-4, 10_000)?;
//! assert_eq!(outcome.strength(&"a".into()), Some(0.5));
//! assert!(outcome.strength(&"b".into()).unwrap() < 0.5);
//!
//! // Extending the graph and solving again resumes from stored strengths
//! graph.add_default_argument("c", "C")?;
//! graph.add_relation("c", "b", RelationKind::Support)?;
//! let outcome = dialectic_semantics::solve(&mut graph, 1e-2, 1e-4, 10_000)?;
//! assert!(outcome.converged());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The solver can be configured via TOML:
//!
//! ```toml
//! delta = 0.01
//! epsilon = 0.0001
//! max_iterations = 10000
//! ```

#![warn(missing_docs)]

mod aggregation;
mod config;
mod error;
mod integrator;
mod model;
mod outcome;
mod solver;

pub use aggregation::{dfquad_aggregate, influence, target_strength};
pub use config::{SolverConfig, DEFAULT_DELTA, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};
pub use error::SolverError;
pub use integrator::Rk4;
pub use model::{ContinuousDfQuadModel, DynamicalSystem};
pub use outcome::{SolveOutcome, SolveStatus};
pub use solver::GradualSolver;

use dialectic_domain::BipolarGraph;

/// Solve `graph` with explicit parameters
///
/// Shorthand for building a [`GradualSolver`] from
/// `SolverConfig::new(delta, epsilon, max_iterations)` and calling
/// [`GradualSolver::solve`].
pub fn solve(
    graph: &mut BipolarGraph,
    delta: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<SolveOutcome, SolverError> {
    GradualSolver::new(SolverConfig::new(delta, epsilon, max_iterations))?.solve(graph)
}
