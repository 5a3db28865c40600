use crate::core::io::notation::NotationError;
use crate::core::models::sides::Side;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid transformation: {source}")]
    Notation {
        #[from]
        source: NotationError,
    },

    #[error("Reaction rule '{rule_id}' not found in the compound cache")]
    RuleNotFound { rule_id: String },

    #[error("Template reaction '{template_id}' not found for reaction rule '{rule_id}'")]
    TemplateNotFound {
        rule_id: String,
        template_id: String,
    },

    #[error(
        "Rule variant for template '{template_id}' has no '{side}_excluded' list; use legacy detection for this cache"
    )]
    MissingExclusionList { template_id: String, side: Side },
}

impl EngineError {
    /// Whether the error comes from resolving a rule or template identifier.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            EngineError::RuleNotFound { .. } | EngineError::TemplateNotFound { .. }
        )
    }
}
