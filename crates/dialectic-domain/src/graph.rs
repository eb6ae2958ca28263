//! Bipolar argumentation graph
//!
//! Nodes live in a dense vector keyed by an id index, and every node carries
//! its own reverse adjacency (who attacks it, who supports it). The indices
//! are extended inside [`BipolarGraph::add_relation`], so readers never have
//! to rebuild them after the topology changes.

use crate::argument::validate_score;
use crate::{Argument, ArgumentId, ArgumentRole, GraphError, Relation, RelationKind, DEFAULT_BASE_SCORE};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Node {
    argument: Argument,
    attackers: Vec<ArgumentId>,
    supporters: Vec<ArgumentId>,
}

/// A graph of arguments joined by support and attack relations
///
/// Grows monotonically: arguments can be redefined but never removed, and
/// relations are only ever appended.
///
/// # Examples
///
/// ```
/// use dialectic_domain::{BipolarGraph, GraphError, RelationKind};
///
/// let mut graph = BipolarGraph::new();
/// graph.add_default_argument("claim", "The bridge is safe").unwrap();
/// graph.add_argument("crack", "Inspectors found a crack", 0.8).unwrap();
/// graph.add_relation("crack", "claim", RelationKind::Attack).unwrap();
///
/// let missing = graph.add_relation("ghost", "claim", RelationKind::Support);
/// assert!(matches!(missing, Err(GraphError::UnknownArgument(_))));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BipolarGraph {
    nodes: Vec<Node>,
    index: HashMap<ArgumentId, usize>,
    relations: Vec<Relation>,
}

impl BipolarGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no arguments
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index a freshly appended numeric id would take
    ///
    /// Callers that number arguments `0, 1, 2, ...` can use this to pick the
    /// id of the next argument when extending an existing graph.
    pub fn next_index(&self) -> usize {
        self.nodes.len()
    }

    /// Whether an argument with this id exists
    pub fn contains(&self, id: &ArgumentId) -> bool {
        self.index.contains_key(id)
    }

    /// Insert or redefine an evidence argument
    ///
    /// See [`BipolarGraph::add_argument_with_role`].
    pub fn add_argument(
        &mut self,
        id: impl Into<ArgumentId>,
        text: impl Into<String>,
        base_score: f64,
    ) -> Result<(), GraphError> {
        self.add_argument_with_role(id, text, ArgumentRole::Evidence, base_score)
    }

    /// Insert or redefine an evidence argument with [`DEFAULT_BASE_SCORE`]
    pub fn add_default_argument(
        &mut self,
        id: impl Into<ArgumentId>,
        text: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.add_argument(id, text, DEFAULT_BASE_SCORE)
    }

    /// Insert or redefine an argument
    ///
    /// A new id gets `strength = base_score`. Redefining an existing id only
    /// replaces its text, role and base score: its relations and any strength
    /// computed by an earlier solve are kept, so the next solve continues
    /// from where the last one stopped.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidScore`] if `base_score` is outside [0, 1].
    /// The graph is left untouched in that case.
    pub fn add_argument_with_role(
        &mut self,
        id: impl Into<ArgumentId>,
        text: impl Into<String>,
        role: ArgumentRole,
        base_score: f64,
    ) -> Result<(), GraphError> {
        let id = id.into();
        validate_score(&id, base_score)?;

        match self.index.get(&id).copied() {
            Some(idx) => {
                let argument = &mut self.nodes[idx].argument;
                argument.text = text.into();
                argument.role = role;
                argument.base_score = base_score;
            }
            None => {
                let argument = Argument::new(id.clone(), text, role, base_score)?;
                self.index.insert(id, self.nodes.len());
                self.nodes.push(Node {
                    argument,
                    attackers: Vec::new(),
                    supporters: Vec::new(),
                });
            }
        }

        Ok(())
    }

    /// Append a relation from `source` to `target`
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownArgument`] naming the first missing
    /// endpoint. Both endpoints are checked before anything is mutated.
    pub fn add_relation(
        &mut self,
        source: impl Into<ArgumentId>,
        target: impl Into<ArgumentId>,
        kind: RelationKind,
    ) -> Result<(), GraphError> {
        let source = source.into();
        let target = target.into();

        if !self.contains(&source) {
            return Err(GraphError::UnknownArgument(source));
        }
        let target_idx = self.index_of(&target)?;

        let node = &mut self.nodes[target_idx];
        match kind {
            RelationKind::Attack => node.attackers.push(source.clone()),
            RelationKind::Support => node.supporters.push(source.clone()),
        }
        self.relations.push(Relation::new(source, target, kind));

        Ok(())
    }

    /// Sources of every attack on `id`, in insertion order, repeats included
    ///
    /// Empty for an unknown id.
    pub fn attackers_of(&self, id: &ArgumentId) -> &[ArgumentId] {
        self.node(id).map(|n| n.attackers.as_slice()).unwrap_or(&[])
    }

    /// Sources of every support for `id`, in insertion order, repeats included
    ///
    /// Empty for an unknown id.
    pub fn supporters_of(&self, id: &ArgumentId) -> &[ArgumentId] {
        self.node(id).map(|n| n.supporters.as_slice()).unwrap_or(&[])
    }

    /// Stored strength of an argument
    pub fn strength_of(&self, id: &ArgumentId) -> Option<f64> {
        self.argument(id).map(|a| a.strength)
    }

    /// Overwrite the stored strength of an argument
    ///
    /// The value is stored as given; keeping it in range is up to the caller.
    pub fn set_strength(&mut self, id: &ArgumentId, value: f64) -> Result<(), GraphError> {
        let idx = self.index_of(id)?;
        self.nodes[idx].argument.strength = value;
        Ok(())
    }

    /// Base score of an argument
    pub fn base_score_of(&self, id: &ArgumentId) -> Option<f64> {
        self.argument(id).map(|a| a.base_score)
    }

    /// Display text of an argument
    pub fn text_of(&self, id: &ArgumentId) -> Option<&str> {
        self.argument(id).map(|a| a.text.as_str())
    }

    /// First argument (in insertion order) whose text equals `text` exactly
    pub fn find_by_text(&self, text: &str) -> Option<&ArgumentId> {
        self.nodes
            .iter()
            .find(|n| n.argument.text == text)
            .map(|n| &n.argument.id)
    }

    /// Look up an argument by id
    pub fn argument(&self, id: &ArgumentId) -> Option<&Argument> {
        self.node(id).map(|n| &n.argument)
    }

    /// All arguments, in insertion order
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.nodes.iter().map(|n| &n.argument)
    }

    /// All argument ids
    ///
    /// Iteration follows insertion order, which is stable but carries no
    /// meaning beyond display.
    pub fn node_ids(&self) -> impl Iterator<Item = &ArgumentId> + '_ {
        self.nodes.iter().map(|n| &n.argument.id)
    }

    /// Every relation, in the order it was added
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    fn node(&self, id: &ArgumentId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    fn index_of(&self, id: &ArgumentId) -> Result<usize, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownArgument(id.clone()))
    }
}
