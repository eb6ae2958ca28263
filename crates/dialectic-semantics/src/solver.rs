//! Gradual semantics solver
//!
//! Drives [`Rk4`] over a [`ContinuousDfQuadModel`] until the strengths settle
//! or the iteration cap is reached, then writes the result back into the
//! graph so the next solve resumes from it.

use crate::integrator::Rk4;
use crate::model::{ContinuousDfQuadModel, DynamicalSystem};
use crate::{SolveOutcome, SolveStatus, SolverConfig, SolverError};
use dialectic_domain::BipolarGraph;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Computes steady-state strengths for a [`BipolarGraph`]
///
/// Holds only its configuration. Every call builds its own model and
/// integrator, so one solver can serve any number of graphs, including from
/// several threads at once.
///
/// # Examples
///
/// ```
/// use dialectic_domain::{BipolarGraph, RelationKind};
/// use dialectic_semantics::{GradualSolver, SolverConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = BipolarGraph::new();
/// graph.add_default_argument("a", "It will rain")?;
/// graph.add_default_argument("b", "The sky is clear")?;
/// graph.add_relation("b", "a", RelationKind::Attack)?;
///
/// let solver = GradualSolver::new(SolverConfig::default())?;
/// let outcome = solver.solve(&mut graph)?;
///
/// assert!(outcome.converged());
/// assert!(outcome.strength(&"a".into()).unwrap() < 0.5);
/// assert_eq!(graph.strength_of(&"a".into()), outcome.strength(&"a".into()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradualSolver {
    config: SolverConfig,
}

impl GradualSolver {
    /// Create a solver with the given configuration
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a solver with default configuration
    pub fn default_config() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Get the solver's configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Integrate the graph to a steady state and store the result in it
    ///
    /// Integration starts from each argument's stored strength, so solving
    /// again after adding arguments or relations continues from the previous
    /// result instead of from base scores.
    pub fn solve(&self, graph: &mut BipolarGraph) -> Result<SolveOutcome, SolverError> {
        self.run(graph, None)
    }

    /// Like [`GradualSolver::solve`], but stops early once `interrupt` is set
    ///
    /// The flag is checked before every step. An interrupted solve still
    /// writes back the strengths reached so far and reports
    /// [`SolveStatus::Interrupted`].
    pub fn solve_with_interrupt(
        &self,
        graph: &mut BipolarGraph,
        interrupt: &AtomicBool,
    ) -> Result<SolveOutcome, SolverError> {
        self.run(graph, Some(interrupt))
    }

    fn run(
        &self,
        graph: &mut BipolarGraph,
        interrupt: Option<&AtomicBool>,
    ) -> Result<SolveOutcome, SolverError> {
        let SolverConfig {
            delta,
            epsilon,
            max_iterations,
        } = self.config;

        let model = ContinuousDfQuadModel::from_graph(graph)?;
        let mut state = model.initial_state(graph);

        tracing::debug!(
            "Solving {} arguments / {} relations (delta={}, epsilon={}, max_iterations={})",
            model.dimension(),
            graph.relations().len(),
            delta,
            epsilon,
            max_iterations
        );

        if state.is_empty() {
            return Ok(SolveOutcome {
                strengths: HashMap::new(),
                status: SolveStatus::Converged,
                iterations: 0,
                residual: 0.0,
            });
        }

        let mut rk4 = Rk4::new(model.dimension());
        let mut iterations = 0;
        let mut residual = f64::INFINITY;

        let status = loop {
            if interrupt.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break SolveStatus::Interrupted;
            }
            if iterations >= max_iterations {
                break SolveStatus::IterationLimit;
            }

            residual = rk4.step(&model, &mut state, delta);
            iterations += 1;
            tracing::trace!("Step {}: max change {:e}", iterations, residual);

            if residual <= epsilon {
                break SolveStatus::Converged;
            }
        };

        match status {
            SolveStatus::Converged => tracing::info!(
                "Converged after {} iterations (residual {:e})",
                iterations,
                residual
            ),
            SolveStatus::IterationLimit => tracing::warn!(
                "No convergence within {} iterations (residual {:e} > epsilon {:e})",
                iterations,
                residual,
                epsilon
            ),
            SolveStatus::Interrupted => tracing::warn!(
                "Solve interrupted after {} iterations (residual {:e})",
                iterations,
                residual
            ),
        }

        let mut strengths = HashMap::with_capacity(state.len());
        for (id, &value) in model.ids().iter().zip(&state) {
            graph.set_strength(id, value)?;
            strengths.insert(id.clone(), value);
        }

        Ok(SolveOutcome {
            strengths,
            status,
            iterations,
            residual,
        })
    }
}

impl Default for GradualSolver {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_domain::{ArgumentId, RelationKind};

    fn id(s: &str) -> ArgumentId {
        ArgumentId::from(s)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GradualSolver::new(SolverConfig::new(0.0, 1e-4, 10)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = BipolarGraph::new();
        let outcome = GradualSolver::default().solve(&mut graph).unwrap();

        assert!(outcome.converged());
        assert_eq!(outcome.iterations, 0);
        assert!(outcome.strengths.is_empty());
    }

    #[test]
    fn test_isolated_argument_converges_in_one_step() {
        let mut graph = BipolarGraph::new();
        graph.add_argument("a", "alone", 0.3).unwrap();

        let outcome = GradualSolver::default().solve(&mut graph).unwrap();

        assert!(outcome.converged());
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.residual, 0.0);
        assert_eq!(outcome.strength(&id("a")), Some(0.3));
    }

    #[test]
    fn test_writes_back_into_graph() {
        let mut graph = BipolarGraph::new();
        graph.add_default_argument("a", "").unwrap();
        graph.add_default_argument("b", "").unwrap();
        graph.add_relation("a", "b", RelationKind::Support).unwrap();

        let outcome = GradualSolver::default().solve(&mut graph).unwrap();

        for (arg_id, strength) in &outcome.strengths {
            assert_eq!(graph.strength_of(arg_id), Some(*strength));
        }
        assert!(graph.strength_of(&id("b")).unwrap() > 0.5);
    }

    #[test]
    fn test_iteration_cap_is_reported() {
        let mut graph = BipolarGraph::new();
        graph.add_default_argument("a", "").unwrap();
        graph.add_default_argument("b", "").unwrap();
        graph.add_relation("a", "b", RelationKind::Attack).unwrap();

        let solver = GradualSolver::new(SolverConfig::new(1e-2, 1e-4, 3)).unwrap();
        let outcome = solver.solve(&mut graph).unwrap();

        assert_eq!(outcome.status, SolveStatus::IterationLimit);
        assert_eq!(outcome.iterations, 3);
        assert!(outcome.residual > 1e-4);
        // Partial progress is still stored
        let b = graph.strength_of(&id("b")).unwrap();
        assert!(b < 0.5 && b > 0.25);
    }

    #[test]
    fn test_raised_interrupt_stops_before_first_step() {
        let mut graph = BipolarGraph::new();
        graph.add_default_argument("a", "").unwrap();
        graph.add_default_argument("b", "").unwrap();
        graph.add_relation("a", "b", RelationKind::Attack).unwrap();

        let flag = AtomicBool::new(true);
        let outcome = GradualSolver::default()
            .solve_with_interrupt(&mut graph, &flag)
            .unwrap();

        assert_eq!(outcome.status, SolveStatus::Interrupted);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.residual, f64::INFINITY);
        assert_eq!(outcome.strength(&id("b")), Some(0.5));
    }

    #[test]
    fn test_lowered_interrupt_behaves_like_solve() {
        let mut with_flag = BipolarGraph::new();
        with_flag.add_default_argument("a", "").unwrap();
        with_flag.add_default_argument("b", "").unwrap();
        with_flag.add_relation("a", "b", RelationKind::Attack).unwrap();
        let mut plain = with_flag.clone();

        let flag = AtomicBool::new(false);
        let solver = GradualSolver::default();
        let interrupted = solver.solve_with_interrupt(&mut with_flag, &flag).unwrap();
        let solved = solver.solve(&mut plain).unwrap();

        assert_eq!(interrupted, solved);
    }

    #[test]
    fn test_self_attack_settles_below_base() {
        let mut graph = BipolarGraph::new();
        graph.add_default_argument("a", "").unwrap();
        graph.add_relation("a", "a", RelationKind::Attack).unwrap();

        let outcome = GradualSolver::default().solve(&mut graph).unwrap();

        // Fixed point of s = 0.5 - 0.5 s
        assert!(outcome.converged());
        assert!((outcome.strength(&id("a")).unwrap() - 1.0 / 3.0).abs() < 0.02);
    }
}
