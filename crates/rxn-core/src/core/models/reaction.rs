use super::sides::{Sides, Stoichiometry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Orientation of a reaction rule relative to the template reaction it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum RelativeDirection {
    /// Stored as `1`: the rule reads in the template's stored orientation.
    Same,
    /// Stored as `-1`: the rule reads against the template's stored orientation.
    Reversed,
}

impl RelativeDirection {
    pub fn negated(self) -> Self {
        match self {
            Self::Same => Self::Reversed,
            Self::Reversed => Self::Same,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid relative direction flag {0}, expected 1 or -1")]
pub struct InvalidRelativeDirection(pub i64);

impl TryFrom<i64> for RelativeDirection {
    type Error = InvalidRelativeDirection;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Same),
            -1 => Ok(Self::Reversed),
            other => Err(InvalidRelativeDirection(other)),
        }
    }
}

impl From<RelativeDirection> for i64 {
    fn from(direction: RelativeDirection) -> Self {
        match direction {
            RelativeDirection::Same => 1,
            RelativeDirection::Reversed => -1,
        }
    }
}

/// A reduced, directional reaction derived from exactly one template reaction.
///
/// `left`/`right` hold the compounds the rule retained. Newer caches also
/// carry `left_excluded`/`right_excluded`: every compound occurrence dropped
/// from the corresponding template side, repeated once per unit of
/// stoichiometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRule {
    #[serde(default)]
    pub rule_id: String,
    #[serde(default)]
    pub rule_score: Option<f64>,
    #[serde(default)]
    pub reac_id: Option<String>,
    #[serde(default)]
    pub subs_id: Option<String>,
    pub rel_direction: RelativeDirection,
    pub left: Stoichiometry,
    pub right: Stoichiometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_excluded: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_excluded: Option<Vec<String>>,
}

impl ReactionRule {
    pub fn sides(&self) -> Sides<&Stoichiometry> {
        Sides::new(&self.left, &self.right)
    }

    /// A copy of the rule read the other way round: sides and exclusion lists
    /// exchanged, relative direction negated.
    pub fn reversed(&self) -> Self {
        Self {
            rel_direction: self.rel_direction.negated(),
            left: self.right.clone(),
            right: self.left.clone(),
            left_excluded: self.right_excluded.clone(),
            right_excluded: self.left_excluded.clone(),
            ..self.clone()
        }
    }
}

/// The full reaction a rule was derived from, listing every participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateReaction {
    pub left: Stoichiometry,
    pub right: Stoichiometry,
}

impl TemplateReaction {
    pub fn to_sides(&self) -> Sides<Stoichiometry> {
        Sides::new(self.left.clone(), self.right.clone())
    }
}
