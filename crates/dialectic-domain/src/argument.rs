//! Argument module - the nodes of a bipolar argumentation graph

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base score assigned when the caller has no prior for an argument
pub const DEFAULT_BASE_SCORE: f64 = 0.5;

/// Caller-assigned identifier for an argument
///
/// Opaque and stable: the graph never generates, reorders or normalizes ids.
/// Integer ids are stored as their decimal rendering, so `ArgumentId::from(3)`
/// and `ArgumentId::from("3")` name the same argument.
///
/// # Examples
///
/// ```
/// use dialectic_domain::ArgumentId;
///
/// assert_eq!(ArgumentId::from(3usize), ArgumentId::from("3"));
/// assert_eq!(ArgumentId::from("claim").as_str(), "claim");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentId(String);

impl ArgumentId {
    /// Create an id from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArgumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArgumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ArgumentId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<usize> for ArgumentId {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

impl From<&ArgumentId> for ArgumentId {
    fn from(value: &ArgumentId) -> Self {
        value.clone()
    }
}

/// Role an argument plays in the graph it was extracted into
///
/// Purely descriptive; the solver treats every role the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentRole {
    /// The statement under evaluation
    Claim,

    /// Material brought in for or against other arguments
    #[default]
    Evidence,
}

/// A node in the argumentation graph
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Unique identifier
    pub id: ArgumentId,

    /// Display label, never read by the solver
    pub text: String,

    /// Claim or evidence
    pub role: ArgumentRole,

    /// Intrinsic plausibility in [0, 1], before any interaction
    pub base_score: f64,

    /// Last computed strength; equals `base_score` until the first solve
    pub strength: f64,
}

impl Argument {
    /// Create a new argument with `strength` initialized to `base_score`
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidScore`] if `base_score` is outside [0, 1]
    /// or NaN.
    pub fn new(
        id: impl Into<ArgumentId>,
        text: impl Into<String>,
        role: ArgumentRole,
        base_score: f64,
    ) -> Result<Self, GraphError> {
        let id = id.into();
        validate_score(&id, base_score)?;

        Ok(Self {
            id,
            text: text.into(),
            role,
            base_score,
            strength: base_score,
        })
    }
}

/// Check that a score lies in the closed unit interval
pub(crate) fn validate_score(id: &ArgumentId, score: f64) -> Result<(), GraphError> {
    // NaN fails `contains`, so it is rejected here too
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(GraphError::InvalidScore {
            id: id.clone(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_ids_agree() {
        assert_eq!(ArgumentId::from(0usize), ArgumentId::from("0"));
        assert_eq!(ArgumentId::from(42usize).to_string(), "42");
    }

    #[test]
    fn test_new_argument_starts_at_base_score() {
        let arg = Argument::new("a", "text", ArgumentRole::Claim, 0.7).unwrap();
        assert_eq!(arg.strength, 0.7);
        assert_eq!(arg.role, ArgumentRole::Claim);
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(Argument::new("lo", "", ArgumentRole::Evidence, 0.0).is_ok());
        assert!(Argument::new("hi", "", ArgumentRole::Evidence, 1.0).is_ok());
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        for score in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let err = Argument::new("x", "", ArgumentRole::Evidence, score).unwrap_err();
            assert!(matches!(err, GraphError::InvalidScore { .. }));
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ArgumentRole::Claim).unwrap();
        assert_eq!(json, "\"claim\"");
        assert_eq!(ArgumentRole::default(), ArgumentRole::Evidence);
    }
}
