//! Plain node/edge enumeration of a graph
//!
//! Used by callers that want to display or store a graph. Restoring a graph
//! from a snapshot goes through the same validation as building it by hand.

use crate::{ArgumentId, ArgumentRole, BipolarGraph, GraphError, RelationKind};
use serde::{Deserialize, Serialize};

/// One argument as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Argument id
    pub id: ArgumentId,
    /// Claim or evidence
    #[serde(rename = "type", default)]
    pub role: ArgumentRole,
    /// Display text
    pub text: String,
    /// Intrinsic plausibility
    pub base_score: f64,
    /// Stored strength at snapshot time
    pub strength: f64,
}

/// One relation as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    /// Source argument id
    pub source: ArgumentId,
    /// Target argument id
    pub target: ArgumentId,
    /// Support or attack
    pub relation: RelationKind,
}

/// Serializable copy of a whole graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Arguments in insertion order
    pub nodes: Vec<NodeSnapshot>,
    /// Relations in insertion order
    pub edges: Vec<EdgeSnapshot>,
}

impl GraphSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string
    ///
    /// Only checks the JSON shape; convert with [`BipolarGraph::try_from`] to
    /// validate scores and endpoints.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl BipolarGraph {
    /// Copy every node and edge into a [`GraphSnapshot`]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .arguments()
                .map(|a| NodeSnapshot {
                    id: a.id.clone(),
                    role: a.role,
                    text: a.text.clone(),
                    base_score: a.base_score,
                    strength: a.strength,
                })
                .collect(),
            edges: self
                .relations()
                .iter()
                .map(|r| EdgeSnapshot {
                    source: r.source.clone(),
                    target: r.target.clone(),
                    relation: r.kind,
                })
                .collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for BipolarGraph {
    type Error = GraphError;

    /// Rebuild a graph, restoring stored strengths
    ///
    /// Fails on the first out-of-range score or dangling edge. A stored
    /// strength outside [0, 1] is rejected like a bad base score.
    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        let mut graph = BipolarGraph::new();

        for node in snapshot.nodes {
            graph.add_argument_with_role(node.id.clone(), node.text, node.role, node.base_score)?;
            crate::argument::validate_score(&node.id, node.strength)?;
            graph.set_strength(&node.id, node.strength)?;
        }

        for edge in snapshot.edges {
            graph.add_relation(edge.source, edge.target, edge.relation)?;
        }

        Ok(graph)
    }
}
