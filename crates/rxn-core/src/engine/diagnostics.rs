use crate::core::models::sides::{Side, Stoichiometry};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// A non-fatal finding recorded while completing one template candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A candidate compound was dropped because the caller asked to ignore it.
    IgnoredCompound { side: Side, compound_id: String },
    /// A compound to add has no usable structure in the compound cache.
    StructurelessCompound {
        side: Side,
        compound_id: String,
        stoichio: f64,
    },
    /// The rule holds more of a compound than its template reaction.
    RuleExceedsTemplate {
        side: Side,
        compound_id: String,
        excess: f64,
    },
    /// The user's transformation and the rule disagree on a side's total count.
    InputRuleMismatch {
        side: Side,
        input: Stoichiometry,
        rule: Stoichiometry,
    },
    /// The completed transformation and the template disagree on a side's total count.
    StoichiometryMismatch {
        side: Side,
        completed: Stoichiometry,
        template: Stoichiometry,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IgnoredCompound { side, compound_id } => {
                write!(f, "Compound '{}' ignored on the {} side", compound_id, side)
            }
            Diagnostic::StructurelessCompound {
                side,
                compound_id,
                stoichio,
            } => write!(
                f,
                "Compound '{}' (x{}) added on the {} side has no known structure",
                compound_id, stoichio, side
            ),
            Diagnostic::RuleExceedsTemplate {
                side,
                compound_id,
                excess,
            } => write!(
                f,
                "Rule holds {} more of '{}' than its template reaction on the {} side",
                excess, compound_id, side
            ),
            Diagnostic::InputRuleMismatch { side, input, rule } => write!(
                f,
                "Number of compounds differs between the input transformation and the reaction rule on the {} side (input: {:?}, rule: {:?})",
                side, input, rule
            ),
            Diagnostic::StoichiometryMismatch {
                side,
                completed,
                template,
            } => write!(
                f,
                "Number of compounds differs between the completed transformation and the template reaction on the {} side (completed: {:?}, template: {:?})",
                side, completed, template
            ),
        }
    }
}

/// Collects the diagnostics of one candidate, logging each as it arrives.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
