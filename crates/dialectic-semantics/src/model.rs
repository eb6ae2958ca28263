//! Continuous DF-QuAD model
//!
//! Compiles a graph's current topology into dense index lists once per solve,
//! then evaluates `d strength / dt = target - strength` for every argument at
//! once from a full state vector.

use crate::aggregation::{dfquad_aggregate, influence, target_strength};
use crate::SolverError;
use dialectic_domain::{ArgumentId, BipolarGraph, GraphError};
use std::collections::HashMap;

/// A first-order system of ODEs over a dense state vector
pub trait DynamicalSystem {
    /// Length of the state vector
    fn dimension(&self) -> usize;

    /// Write `F(state)` into `out`
    ///
    /// Every component is computed from `state` as given; `out` is never read.
    /// Both slices have length [`DynamicalSystem::dimension`].
    fn derivative(&self, state: &[f64], out: &mut [f64]);
}

/// Gradual DF-QuAD dynamics of one graph
///
/// Owns a frozen copy of the topology and base scores: edits made to the graph
/// after the model is built are not seen by it.
#[derive(Debug, Clone)]
pub struct ContinuousDfQuadModel {
    ids: Vec<ArgumentId>,
    base_scores: Vec<f64>,
    attackers: Vec<Vec<usize>>,
    supporters: Vec<Vec<usize>>,
}

impl ContinuousDfQuadModel {
    /// Build the model from a graph's current arguments and relations
    pub fn from_graph(graph: &BipolarGraph) -> Result<Self, SolverError> {
        let position: HashMap<&ArgumentId, usize> = graph
            .node_ids()
            .enumerate()
            .map(|(idx, id)| (id, idx))
            .collect();

        let resolve = |sources: &[ArgumentId]| -> Result<Vec<usize>, GraphError> {
            sources
                .iter()
                .map(|s| {
                    position
                        .get(s)
                        .copied()
                        .ok_or_else(|| GraphError::UnknownArgument(s.clone()))
                })
                .collect()
        };

        let mut ids = Vec::with_capacity(graph.len());
        let mut base_scores = Vec::with_capacity(graph.len());
        let mut attackers = Vec::with_capacity(graph.len());
        let mut supporters = Vec::with_capacity(graph.len());

        for argument in graph.arguments() {
            attackers.push(resolve(graph.attackers_of(&argument.id))?);
            supporters.push(resolve(graph.supporters_of(&argument.id))?);
            ids.push(argument.id.clone());
            base_scores.push(argument.base_score);
        }

        Ok(Self {
            ids,
            base_scores,
            attackers,
            supporters,
        })
    }

    /// Argument ids, in state-vector order
    pub fn ids(&self) -> &[ArgumentId] {
        &self.ids
    }

    /// Starting state: the graph's stored strengths
    ///
    /// A stored strength outside [0, 1] is clamped, and a non-finite one
    /// falls back to the argument's base score.
    pub fn initial_state(&self, graph: &BipolarGraph) -> Vec<f64> {
        self.ids
            .iter()
            .zip(&self.base_scores)
            .map(|(id, &base)| match graph.strength_of(id) {
                Some(s) if s.is_finite() => s.clamp(0.0, 1.0),
                _ => base,
            })
            .collect()
    }

    /// Aggregated attack force on argument `idx` under `state`
    pub fn attack_force(&self, state: &[f64], idx: usize) -> f64 {
        dfquad_aggregate(self.attackers[idx].iter().map(|&j| state[j]))
    }

    /// Aggregated support force on argument `idx` under `state`
    pub fn support_force(&self, state: &[f64], idx: usize) -> f64 {
        dfquad_aggregate(self.supporters[idx].iter().map(|&j| state[j]))
    }

    /// Strength argument `idx` is currently pulled toward
    pub fn target(&self, state: &[f64], idx: usize) -> f64 {
        let net = influence(self.support_force(state, idx), self.attack_force(state, idx));
        target_strength(self.base_scores[idx], net)
    }
}

impl DynamicalSystem for ContinuousDfQuadModel {
    fn dimension(&self) -> usize {
        self.ids.len()
    }

    fn derivative(&self, state: &[f64], out: &mut [f64]) {
        for (idx, slot) in out.iter_mut().enumerate() {
            *slot = self.target(state, idx) - state[idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_domain::RelationKind;

    fn graph_with(edges: &[(&str, &str, RelationKind)]) -> BipolarGraph {
        let mut graph = BipolarGraph::new();
        for name in ["a", "b", "c"] {
            graph.add_default_argument(name, name).unwrap();
        }
        for (s, t, kind) in edges {
            graph.add_relation(*s, *t, *kind).unwrap();
        }
        graph
    }

    #[test]
    fn test_isolated_arguments_have_zero_derivative() {
        let graph = graph_with(&[]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        let state = model.initial_state(&graph);
        let mut out = vec![1.0; model.dimension()];

        model.derivative(&state, &mut out);
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_attack_pulls_target_down() {
        let graph = graph_with(&[("a", "b", RelationKind::Attack)]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        let state = model.initial_state(&graph);

        assert_eq!(model.attack_force(&state, 1), 0.5);
        assert_eq!(model.support_force(&state, 1), 0.0);
        assert_eq!(model.target(&state, 1), 0.25);

        let mut out = vec![0.0; 3];
        model.derivative(&state, &mut out);
        assert_eq!(out[1], -0.25);
    }

    #[test]
    fn test_parallel_attacks_compound() {
        let graph = graph_with(&[
            ("a", "b", RelationKind::Attack),
            ("a", "b", RelationKind::Attack),
        ]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        let state = model.initial_state(&graph);

        assert_eq!(model.attack_force(&state, 1), 0.75);
    }

    #[test]
    fn test_mixed_influence_cancels() {
        let graph = graph_with(&[
            ("a", "b", RelationKind::Attack),
            ("c", "b", RelationKind::Support),
        ]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        let state = model.initial_state(&graph);

        assert_eq!(model.target(&state, 1), 0.5);
    }

    #[test]
    fn test_derivative_reads_only_given_state() {
        let graph = graph_with(&[
            ("a", "b", RelationKind::Attack),
            ("b", "a", RelationKind::Attack),
        ]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        let state = vec![1.0, 0.0, 0.5];
        let mut out = vec![0.0; 3];

        model.derivative(&state, &mut out);
        // a: no effective attack (b = 0) -> target 0.5
        assert_eq!(out[0], 0.5 - 1.0);
        // b: fully attacked -> target 0
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn test_initial_state_uses_stored_strengths() {
        let mut graph = graph_with(&[]);
        graph.set_strength(&"a".into(), 0.9).unwrap();
        graph.set_strength(&"b".into(), 7.0).unwrap();
        graph.set_strength(&"c".into(), f64::NAN).unwrap();
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();

        assert_eq!(model.initial_state(&graph), vec![0.9, 1.0, 0.5]);
    }

    #[test]
    fn test_model_is_frozen_at_build_time() {
        let mut graph = graph_with(&[]);
        let model = ContinuousDfQuadModel::from_graph(&graph).unwrap();
        graph.add_default_argument("d", "late").unwrap();

        assert_eq!(model.dimension(), 3);
        assert_eq!(model.ids().len(), 3);
    }
}
