use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use rxnrebuild::core::cache::CompoundCache;
use rxnrebuild::core::io::notation::render_sides_with;
use rxnrebuild::core::models::compound::CompoundRecord;
use rxnrebuild::core::models::sides::Side;
use rxnrebuild::core::models::transformation::Format;
use rxnrebuild::engine::completer::CompletedResult;
use rxnrebuild::workflows::complete::CompletedTransformations;
use std::borrow::Cow;

/// Writes the completed transformation of `result` in `format`.
///
/// In SMILES notation, added compounds with a known structure are written as
/// their SMILES; user compounds and structureless ones keep their key.
pub fn render_completed<C: CompoundCache + ?Sized>(
    result: &CompletedResult,
    format: Format,
    cache: &C,
) -> Option<String> {
    let full = result.full_transfo.as_ref()?;
    let is_added = |key: &str| Side::BOTH
        .into_iter()
        .any(|side| result.added_cmpds.side(side).contains_key(key));

    Some(render_sides_with(full, format, |key| {
        if format != Format::Smiles || !is_added(key) {
            return Cow::Borrowed(key);
        }
        match cache
            .compound_structure(key)
            .and_then(CompoundRecord::structure)
        {
            Some(smiles) => Cow::Owned(smiles.to_string()),
            None => Cow::Borrowed(key),
        }
    }))
}

pub fn render_text<C: CompoundCache + ?Sized>(
    results: &CompletedTransformations,
    format: Format,
    cache: &C,
) -> String {
    if results.is_empty() {
        return "No transformation could be completed.".to_string();
    }

    let mut lines = Vec::new();
    for (template_id, result) in results {
        match render_completed(result, format, cache) {
            Some(transfo) => lines.push(format!(
                "completed from template reaction {}: {}",
                template_id, transfo
            )),
            None => {
                let missing: Vec<&str> = Side::BOTH
                    .into_iter()
                    .flat_map(|side| result.added_cmpds.nostruct(side).keys())
                    .map(String::as_str)
                    .collect();
                lines.push(format!(
                    "not completed from template reaction {}: no structure for {}",
                    template_id,
                    missing.join(", ")
                ));
            }
        }
        lines.extend(
            result
                .warnings
                .iter()
                .map(|warning| format!("    warning: {}", warning)),
        );
    }
    lines.join("\n")
}

pub fn render<C: CompoundCache + ?Sized>(
    results: &CompletedTransformations,
    format: Format,
    cache: &C,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(render_text(results, format, cache)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(results).map_err(|e| CliError::Other(e.into()))
        }
    }
}
