//! Relation module - directed support and attack edges

use crate::{ArgumentId, GraphError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Polarity of a relation between two arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Source raises the target's strength
    Support,

    /// Source lowers the target's strength
    Attack,
}

impl RelationKind {
    /// Lowercase label used in snapshots and relation-detection output
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Support => "support",
            RelationKind::Attack => "attack",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = GraphError;

    /// Parse a relation label, ignoring case and surrounding whitespace
    ///
    /// # Examples
    ///
    /// ```
    /// use dialectic_domain::RelationKind;
    ///
    /// assert_eq!(" Attack ".parse::<RelationKind>().unwrap(), RelationKind::Attack);
    /// assert!("neutral".parse::<RelationKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "support" => Ok(RelationKind::Support),
            "attack" => Ok(RelationKind::Attack),
            _ => Err(GraphError::UnknownRelationKind(s.to_string())),
        }
    }
}

/// A directed edge between two arguments
///
/// Parallel edges between the same pair are legal and each one counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    /// Argument exerting the influence
    pub source: ArgumentId,

    /// Argument receiving the influence
    pub target: ArgumentId,

    /// Support or attack
    pub kind: RelationKind,
}

impl Relation {
    /// Create a new relation
    pub fn new(source: ArgumentId, target: ArgumentId, kind: RelationKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// Whether the relation points back at its own source
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
