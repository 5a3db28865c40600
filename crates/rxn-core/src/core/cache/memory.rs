use super::{CompoundCache, RuleVariants};
use crate::core::models::compound::CompoundRecord;
use crate::core::models::reaction::{ReactionRule, TemplateReaction};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

pub const RULES_FILE: &str = "rr_reactions.json";
pub const TEMPLATES_FILE: &str = "template_reactions.json";
pub const COMPOUNDS_FILE: &str = "cid_strc.json";

#[derive(Debug, Error)]
pub enum CacheLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory compound cache.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    rules: HashMap<String, RuleVariants>,
    templates: HashMap<String, TemplateReaction>,
    compounds: HashMap<String, CompoundRecord>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `rr_reactions.json`, `template_reactions.json` and `cid_strc.json`
    /// from `dir`. A missing file leaves its table empty.
    pub fn load_dir(dir: &Path) -> Result<Self, CacheLoadError> {
        debug!("Loading compound cache from {:?}", dir);
        let cache = Self {
            rules: load_table(&dir.join(RULES_FILE))?,
            templates: load_table(&dir.join(TEMPLATES_FILE))?,
            compounds: load_table(&dir.join(COMPOUNDS_FILE))?,
        };
        debug!(
            rules = cache.rules.len(),
            templates = cache.templates.len(),
            compounds = cache.compounds.len(),
            "Compound cache loaded."
        );
        Ok(cache)
    }

    pub fn insert_rule(
        &mut self,
        rule_id: impl Into<String>,
        template_id: impl Into<String>,
        rule: ReactionRule,
    ) -> &mut Self {
        self.rules
            .entry(rule_id.into())
            .or_default()
            .insert(template_id.into(), rule);
        self
    }

    pub fn insert_template(
        &mut self,
        template_id: impl Into<String>,
        template: TemplateReaction,
    ) -> &mut Self {
        self.templates.insert(template_id.into(), template);
        self
    }

    pub fn insert_compound(
        &mut self,
        compound_id: impl Into<String>,
        record: CompoundRecord,
    ) -> &mut Self {
        self.compounds.insert(compound_id.into(), record);
        self
    }
}

impl CompoundCache for MemoryCache {
    fn rule_variants(&self, rule_id: &str) -> Option<&RuleVariants> {
        self.rules.get(rule_id)
    }

    fn template(&self, template_id: &str) -> Option<&TemplateReaction> {
        self.templates.get(template_id)
    }

    fn compound_structure(&self, compound_id: &str) -> Option<&CompoundRecord> {
        self.compounds.get(compound_id)
    }
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>, CacheLoadError> {
    if !path.exists() {
        warn!("Cache file {:?} not found, treating it as empty.", path);
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| CacheLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| CacheLoadError::Json {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
