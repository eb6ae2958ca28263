//! Result of a solve

use dialectic_domain::ArgumentId;
use std::collections::HashMap;
use std::fmt;

/// How an integration run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// The per-step change fell to `epsilon` or below
    Converged,

    /// `max_iterations` steps were taken without converging
    ///
    /// Typical for oscillating topologies such as some odd attack cycles.
    /// The strengths are the last computed vector.
    IterationLimit,

    /// The caller raised the interrupt flag between two steps
    Interrupted,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolveStatus::Converged => "converged",
            SolveStatus::IterationLimit => "iteration limit reached",
            SolveStatus::Interrupted => "interrupted",
        };
        f.write_str(label)
    }
}

/// Strengths computed by a solve, plus how trustworthy they are
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Final strength of every argument in the graph
    pub strengths: HashMap<ArgumentId, f64>,

    /// How the run ended
    pub status: SolveStatus,

    /// Number of RK4 steps taken
    pub iterations: usize,

    /// Largest per-component change in the last step
    ///
    /// `0.0` for an empty graph, `f64::INFINITY` if no step was taken.
    pub residual: f64,
}

impl SolveOutcome {
    /// Whether the run met its convergence threshold
    pub fn converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Final strength of one argument
    pub fn strength(&self, id: &ArgumentId) -> Option<f64> {
        self.strengths.get(id).copied()
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} arguments, {} after {} iterations (residual {:.3e})",
            self.strengths.len(),
            self.status,
            self.iterations,
            self.residual
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: SolveStatus) -> SolveOutcome {
        SolveOutcome {
            strengths: HashMap::from([(ArgumentId::from("a"), 0.25)]),
            status,
            iterations: 12,
            residual: 5e-5,
        }
    }

    #[test]
    fn test_converged_flag() {
        assert!(outcome(SolveStatus::Converged).converged());
        assert!(!outcome(SolveStatus::IterationLimit).converged());
        assert!(!outcome(SolveStatus::Interrupted).converged());
    }

    #[test]
    fn test_strength_lookup() {
        let outcome = outcome(SolveStatus::Converged);
        assert_eq!(outcome.strength(&"a".into()), Some(0.25));
        assert_eq!(outcome.strength(&"b".into()), None);
    }

    #[test]
    fn test_summary_mentions_status() {
        let summary = outcome(SolveStatus::IterationLimit).summary();
        assert!(summary.contains("iteration limit reached"));
        assert!(summary.contains("12 iterations"));
    }
}
