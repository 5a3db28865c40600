//! # Cache Module
//!
//! Read-only access to the pre-computed reaction data the engine works from:
//! reaction rules (grouped by rule ID, one variant per template reaction),
//! template reactions, and compound structures.
//!
//! The engine only ever reads through [`CompoundCache`]; [`MemoryCache`] is the
//! bundled implementation, filled programmatically or loaded from JSON files.

mod memory;

pub use memory::{
    CacheLoadError, MemoryCache, COMPOUNDS_FILE, RULES_FILE, TEMPLATES_FILE,
};

use crate::core::models::compound::CompoundRecord;
use crate::core::models::reaction::{ReactionRule, TemplateReaction};
use indexmap::IndexMap;

/// Rule variants of one rule ID, keyed by the template reaction they were derived from.
pub type RuleVariants = IndexMap<String, ReactionRule>;

pub trait CompoundCache {
    fn rule_variants(&self, rule_id: &str) -> Option<&RuleVariants>;

    fn template(&self, template_id: &str) -> Option<&TemplateReaction>;

    fn compound_structure(&self, compound_id: &str) -> Option<&CompoundRecord>;
}

impl<C: CompoundCache + ?Sized> CompoundCache for &C {
    fn rule_variants(&self, rule_id: &str) -> Option<&RuleVariants> {
        (**self).rule_variants(rule_id)
    }

    fn template(&self, template_id: &str) -> Option<&TemplateReaction> {
        (**self).template(template_id)
    }

    fn compound_structure(&self, compound_id: &str) -> Option<&CompoundRecord> {
        (**self).compound_structure(compound_id)
    }
}
