use crate::core::cache::CompoundCache;
use crate::core::io::notation::parse_transformation;
use crate::core::models::compound::CompoundRecord;
use crate::core::models::sides::Sides;
use crate::core::models::transformation::{Format, Transformation};
use crate::core::utils::multiset;
use crate::engine::completer::{self, CompletedResult};
use crate::engine::config::{CompletionConfig, ConsistencyPolicy};
use crate::engine::consistency;
use crate::engine::detector::{self, MissingCompoundDetector};
use crate::engine::diagnostics::Diagnostics;
use crate::engine::direction;
use crate::engine::error::EngineError;
use crate::engine::resolver::{self, Candidate};
use indexmap::IndexMap;
use tracing::{debug, error, info, instrument, warn};

/// Completed results keyed by template reaction ID, in processing order.
pub type CompletedTransformations = IndexMap<String, CompletedResult>;

/// Completes `transfo` with the compounds `rule_id` dropped from its template reaction(s).
///
/// One result is produced per template reaction considered. A malformed
/// transformation is an error; an unknown rule or template is logged and
/// yields an empty mapping. A candidate that cannot be completed is logged and
/// skipped without affecting the others.
#[instrument(skip_all, name = "completion_workflow", fields(rule_id = %rule_id))]
pub fn run<C: CompoundCache + ?Sized>(
    cache: &C,
    rule_id: &str,
    transfo: &str,
    config: &CompletionConfig,
) -> Result<CompletedTransformations, EngineError> {
    info!("Starting transformation completion.");
    let input = parse_transformation(transfo)?;
    debug!(?input, "Input transformation parsed.");

    let candidates = match resolver::resolve(cache, rule_id, config.template_id.as_deref()) {
        Ok(candidates) => candidates,
        Err(e) if e.is_lookup_failure() => {
            error!(
                "{}. Check that the compound cache was built from the same data source and version as the reaction rules.",
                e
            );
            return Ok(CompletedTransformations::new());
        }
        Err(e) => return Err(e),
    };

    let detector = detector::detector_for(config.mode, cache);
    let mut results = CompletedTransformations::new();

    for candidate in candidates {
        match complete_candidate(cache, &input, candidate, detector.as_ref(), config) {
            Ok(Some(result)) => {
                results.insert(candidate.template_id.to_string(), result);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    template_id = candidate.template_id,
                    "Skipping template reaction: {}", e
                );
            }
        }
    }

    info!(
        "Workflow complete. Returning {} completed transformation(s).",
        results.len()
    );
    Ok(results)
}

fn complete_candidate<C: CompoundCache + ?Sized>(
    cache: &C,
    input: &Transformation,
    candidate: Candidate<'_>,
    detector: &dyn MissingCompoundDetector,
    config: &CompletionConfig,
) -> Result<Option<CompletedResult>, EngineError> {
    let template = cache
        .template(candidate.template_id)
        .ok_or_else(|| EngineError::TemplateNotFound {
            rule_id: candidate.rule.rule_id.clone(),
            template_id: candidate.template_id.to_string(),
        })?;

    let oriented = direction::normalize(candidate.rule, template, config.direction);
    debug!(template_id = candidate.template_id, ?oriented, "Rule and template oriented.");

    let mut diagnostics = Diagnostics::new();
    let mut added_cmpds = detector.detect(
        &oriented,
        candidate.template_id,
        &config.compounds_to_ignore,
        &mut diagnostics,
    )?;

    let supplied = completer::discount_supplied(
        &mut added_cmpds,
        &input.sides,
        oriented.rule.sides(),
        |compound_id| match input.format {
            Format::Smiles => cache
                .compound_structure(compound_id)
                .and_then(CompoundRecord::structure),
            Format::Cid => None,
        },
    );
    if !supplied.left.is_empty() || !supplied.right.is_empty() {
        debug!(
            template_id = candidate.template_id,
            ?supplied,
            "Missing compounds already present in the input."
        );
    }
    let user_part = Sides::new(
        multiset::difference(&input.sides.left, &supplied.left),
        multiset::difference(&input.sides.right, &supplied.right),
    );
    consistency::check_input(&user_part, oriented.rule.sides(), &mut diagnostics);

    let full_transfo = completer::complete(input, &added_cmpds, config.allow_structureless);
    match &full_transfo {
        Some(completed) => {
            let consistent =
                consistency::check_completed(completed, &oriented.template, &mut diagnostics);
            if !consistent && config.consistency == ConsistencyPolicy::Strict {
                warn!(
                    template_id = candidate.template_id,
                    "Completed transformation does not match the template reaction, dropping it."
                );
                return Ok(None);
            }
        }
        None => {
            warn!(
                template_id = candidate.template_id,
                "Completed transformation withheld: some compounds to add have no known structure."
            );
        }
    }

    Ok(Some(CompletedResult {
        full_transfo,
        added_cmpds,
        sep_side: input.sep_side().to_string(),
        sep_cmpd: input.sep_cmpd().to_string(),
        warnings: diagnostics.into_vec(),
    }))
}
