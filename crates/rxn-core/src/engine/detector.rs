use super::config::DetectionMode;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::direction::Oriented;
use super::error::EngineError;
use crate::core::cache::CompoundCache;
use crate::core::models::compound::CompoundRecord;
use crate::core::models::sides::{Side, Stoichiometry};
use crate::core::utils::multiset;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A compound to add that has no known structure, so it can only be written by its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructurelessCompound {
    pub stoichio: f64,
    pub cid: String,
}

/// Compounds dropped from the template when the rule was built, per side.
///
/// `left`/`right` map compound identifiers to the amount to add. The
/// `*_nostruct` buckets are only filled by legacy detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingCompounds {
    pub left: Stoichiometry,
    pub right: Stoichiometry,
    pub left_nostruct: IndexMap<String, StructurelessCompound>,
    pub right_nostruct: IndexMap<String, StructurelessCompound>,
}

impl MissingCompounds {
    pub fn side(&self, side: Side) -> &Stoichiometry {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Stoichiometry {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn nostruct(&self, side: Side) -> &IndexMap<String, StructurelessCompound> {
        match side {
            Side::Left => &self.left_nostruct,
            Side::Right => &self.right_nostruct,
        }
    }

    pub fn nostruct_mut(&mut self, side: Side) -> &mut IndexMap<String, StructurelessCompound> {
        match side {
            Side::Left => &mut self.left_nostruct,
            Side::Right => &mut self.right_nostruct,
        }
    }

    pub fn has_structureless(&self) -> bool {
        !self.left_nostruct.is_empty() || !self.right_nostruct.is_empty()
    }

    /// Whether `compound_id` is to be added on any side, in any bucket.
    pub fn contains(&self, compound_id: &str) -> bool {
        Side::BOTH.into_iter().any(|side| {
            self.side(side).contains_key(compound_id)
                || self.nostruct(side).contains_key(compound_id)
        })
    }
}

pub trait MissingCompoundDetector {
    /// Computes the compounds missing from `oriented.rule` on each side.
    ///
    /// Compounds listed in `ignored` are never returned; each one skipped is
    /// recorded in `diagnostics`.
    fn detect(
        &self,
        oriented: &Oriented,
        template_id: &str,
        ignored: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<MissingCompounds, EngineError>;
}

/// Returns the detector implementing `mode`.
pub fn detector_for<'c, C: CompoundCache + ?Sized>(
    mode: DetectionMode,
    cache: &'c C,
) -> Box<dyn MissingCompoundDetector + 'c> {
    match mode {
        DetectionMode::Precomputed => Box::new(PrecomputedDetector),
        DetectionMode::Legacy => Box::new(LegacyDetector::new(cache)),
    }
}

fn is_ignored(ignored: &[String], compound_id: &str) -> bool {
    ignored.iter().any(|id| id == compound_id)
}

/// Reads the exclusion lists stored on the rule record.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecomputedDetector;

impl MissingCompoundDetector for PrecomputedDetector {
    fn detect(
        &self,
        oriented: &Oriented,
        template_id: &str,
        ignored: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<MissingCompounds, EngineError> {
        let mut missing = MissingCompounds::default();

        for side in Side::BOTH {
            let excluded = match side {
                Side::Left => oriented.rule.left_excluded.as_ref(),
                Side::Right => oriented.rule.right_excluded.as_ref(),
            }
            .ok_or_else(|| EngineError::MissingExclusionList {
                template_id: template_id.to_string(),
                side,
            })?;

            for (compound_id, count) in multiset::tally(excluded.iter().map(String::as_str)) {
                if is_ignored(ignored, &compound_id) {
                    diagnostics.push(Diagnostic::IgnoredCompound { side, compound_id });
                    continue;
                }
                missing.side_mut(side).insert(compound_id, count);
            }
        }

        debug!(template_id, ?missing, "Missing compounds read from exclusion lists.");
        Ok(missing)
    }
}

/// Diffs template and rule and sorts the difference by structure availability.
pub struct LegacyDetector<'c, C: ?Sized> {
    cache: &'c C,
}

impl<'c, C: CompoundCache + ?Sized> LegacyDetector<'c, C> {
    pub fn new(cache: &'c C) -> Self {
        Self { cache }
    }
}

impl<C: CompoundCache + ?Sized> MissingCompoundDetector for LegacyDetector<'_, C> {
    fn detect(
        &self,
        oriented: &Oriented,
        template_id: &str,
        ignored: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<MissingCompounds, EngineError> {
        let mut missing = MissingCompounds::default();
        let rule_sides = oriented.rule.sides();

        for side in Side::BOTH {
            let template_side = oriented.template.get(side);
            let rule_side = *rule_sides.get(side);

            for (compound_id, excess) in multiset::excess(template_side, rule_side) {
                diagnostics.push(Diagnostic::RuleExceedsTemplate {
                    side,
                    compound_id,
                    excess,
                });
            }

            for (compound_id, count) in multiset::difference(template_side, rule_side) {
                if is_ignored(ignored, &compound_id) {
                    diagnostics.push(Diagnostic::IgnoredCompound { side, compound_id });
                    continue;
                }
                let has_structure = self
                    .cache
                    .compound_structure(&compound_id)
                    .and_then(CompoundRecord::structure)
                    .is_some();
                if has_structure {
                    missing.side_mut(side).insert(compound_id, count);
                } else {
                    diagnostics.push(Diagnostic::StructurelessCompound {
                        side,
                        compound_id: compound_id.clone(),
                        stoichio: count,
                    });
                    missing.nostruct_mut(side).insert(
                        compound_id.clone(),
                        StructurelessCompound {
                            stoichio: count,
                            cid: compound_id,
                        },
                    );
                }
            }
        }

        debug!(template_id, ?missing, "Missing compounds detected from template difference.");
        Ok(missing)
    }
}
