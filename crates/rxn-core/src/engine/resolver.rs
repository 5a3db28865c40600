use super::error::EngineError;
use crate::core::cache::CompoundCache;
use crate::core::models::reaction::ReactionRule;
use tracing::debug;

/// One rule variant to complete, identified by the template reaction it was derived from.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'c> {
    pub template_id: &'c str,
    pub rule: &'c ReactionRule,
}

/// Collects the rule variants to process for `rule_id`.
///
/// With `template_id`, only that variant is returned; otherwise every
/// variant, in stored order.
pub fn resolve<'c, C: CompoundCache + ?Sized>(
    cache: &'c C,
    rule_id: &str,
    template_id: Option<&str>,
) -> Result<Vec<Candidate<'c>>, EngineError> {
    let variants = cache
        .rule_variants(rule_id)
        .ok_or_else(|| EngineError::RuleNotFound {
            rule_id: rule_id.to_string(),
        })?;

    let candidates: Vec<Candidate<'c>> = match template_id {
        Some(wanted) => {
            let (template_id, rule) =
                variants
                    .get_key_value(wanted)
                    .ok_or_else(|| EngineError::TemplateNotFound {
                        rule_id: rule_id.to_string(),
                        template_id: wanted.to_string(),
                    })?;
            vec![Candidate {
                template_id: template_id.as_str(),
                rule,
            }]
        }
        None => variants
            .iter()
            .map(|(template_id, rule)| Candidate {
                template_id: template_id.as_str(),
                rule,
            })
            .collect(),
    };

    debug!(
        rule_id,
        candidates = candidates.len(),
        "Resolved reaction rule variants."
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cache::MemoryCache;
    use crate::core::models::reaction::RelativeDirection;
    use indexmap::IndexMap;

    fn rule() -> ReactionRule {
        ReactionRule {
            rule_id: "RR-1".to_string(),
            rule_score: None,
            reac_id: None,
            subs_id: None,
            rel_direction: RelativeDirection::Same,
            left: IndexMap::new(),
            right: IndexMap::new(),
            left_excluded: None,
            right_excluded: None,
        }
    }

    fn cache() -> MemoryCache {
        let mut cache = MemoryCache::new();
        cache
            .insert_rule("RR-1", "R2", rule())
            .insert_rule("RR-1", "R1", rule());
        cache
    }

    #[test]
    fn without_template_every_variant_is_returned_in_order() {
        let cache = cache();
        let candidates = resolve(&cache, "RR-1", None).unwrap();
        let ids: Vec<_> = candidates.iter().map(|c| c.template_id).collect();
        assert_eq!(ids, vec!["R2", "R1"]);
    }

    #[test]
    fn with_template_only_that_variant_is_returned() {
        let cache = cache();
        let candidates = resolve(&cache, "RR-1", Some("R1")).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].template_id, "R1");
    }

    #[test]
    fn unknown_rule_is_a_lookup_failure() {
        let cache = cache();
        let err = resolve(&cache, "RR-404", None).unwrap_err();
        assert!(matches!(err, EngineError::RuleNotFound { ref rule_id } if rule_id == "RR-404"));
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn unknown_template_is_a_lookup_failure() {
        let cache = cache();
        let err = resolve(&cache, "RR-1", Some("R9")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TemplateNotFound { ref template_id, .. } if template_id == "R9"
        ));
        assert!(err.is_lookup_failure());
    }
}
