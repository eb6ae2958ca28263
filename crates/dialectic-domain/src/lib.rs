//! Dialectic Domain Layer
//!
//! This crate holds the bipolar argumentation graph: arguments with base
//! scores, and directed `support` / `attack` relations between them. It owns
//! topology and stored strengths only; computing strengths is the job of
//! `dialectic-semantics`.
//!
//! ## Key Concepts
//!
//! - **Argument**: a claim or piece of evidence with a base score in [0, 1]
//! - **Strength**: the post-interaction plausibility, written back by a solver
//! - **Relation**: a directed support or attack edge between two arguments
//! - **Snapshot**: a plain node/edge enumeration for display and persistence
//!
//! ## Example
//!
//! ```
//! use dialectic_domain::{BipolarGraph, RelationKind};
//!
//! let mut graph = BipolarGraph::new();
//! graph.add_default_argument("a", "Vaccines are safe").unwrap();
//! graph.add_argument("b", "Vaccines cause harm", 0.4).unwrap();
//! graph.add_relation("a", "b", RelationKind::Attack).unwrap();
//!
//! assert_eq!(graph.attackers_of(&"b".into()).len(), 1);
//! assert_eq!(graph.strength_of(&"b".into()), Some(0.4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod error;
pub mod graph;
pub mod relation;
pub mod snapshot;

// Re-exports for convenience
pub use argument::{Argument, ArgumentId, ArgumentRole, DEFAULT_BASE_SCORE};
pub use error::GraphError;
pub use graph::BipolarGraph;
pub use relation::{Relation, RelationKind};
pub use snapshot::{EdgeSnapshot, GraphSnapshot, NodeSnapshot};
