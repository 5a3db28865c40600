use super::detector::MissingCompounds;
use super::diagnostics::Diagnostic;
use crate::core::models::sides::{Side, Sides, Stoichiometry};
use crate::core::models::transformation::Transformation;
use crate::core::utils::multiset;
use serde::{Deserialize, Serialize};

/// The outcome of completing a transformation against one template reaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedResult {
    /// The completed transformation, or `None` when structureless compounds
    /// blocked it.
    pub full_transfo: Option<Sides<Stoichiometry>>,
    pub added_cmpds: MissingCompounds,
    pub sep_side: String,
    pub sep_cmpd: String,
    #[serde(default, skip_deserializing)]
    pub warnings: Vec<Diagnostic>,
}

/// Merges `missing` into a copy of the user's transformation.
///
/// Counts are added to whatever the user already supplied for the same key.
/// Structureless compounds are merged under their identifier, unless
/// `allow_structureless` is false, in which case nothing is returned.
pub fn complete(
    input: &Transformation,
    missing: &MissingCompounds,
    allow_structureless: bool,
) -> Option<Sides<Stoichiometry>> {
    if missing.has_structureless() && !allow_structureless {
        return None;
    }

    let mut completed = input.sides.clone();
    for side in Side::BOTH {
        let target = completed.get_mut(side);
        multiset::merge_add(
            target,
            missing
                .side(side)
                .iter()
                .map(|(id, &count)| (id.as_str(), count)),
        );
        multiset::merge_add(
            target,
            missing
                .nostruct(side)
                .values()
                .map(|compound| (compound.cid.as_str(), compound.stoichio)),
        );
    }
    Some(completed)
}

/// Takes off `missing` whatever the user already wrote beyond the rule, so
/// completing an already-completed transformation adds nothing.
///
/// A compound ID matches a user compound written either as that ID or as the
/// structure `structure_of` returns for it. Returns the amounts taken as
/// already supplied, keyed like the input.
pub fn discount_supplied<'k>(
    missing: &mut MissingCompounds,
    input: &Sides<Stoichiometry>,
    rule: Sides<&Stoichiometry>,
    structure_of: impl Fn(&str) -> Option<&'k str>,
) -> Sides<Stoichiometry> {
    let mut supplied = Sides::<Stoichiometry>::default();

    for side in Side::BOTH {
        let input_side = input.get(side);
        let input_key = |compound_id: &str| -> String {
            if input_side.contains_key(compound_id) {
                return compound_id.to_string();
            }
            structure_of(compound_id)
                .filter(|structure| input_side.contains_key(*structure))
                .unwrap_or(compound_id)
                .to_string()
        };

        let mut rule_side = Stoichiometry::new();
        for (compound_id, &count) in rule.get(side).iter() {
            *rule_side.entry(input_key(compound_id)).or_insert(0.0) += count;
        }
        let mut surplus = multiset::difference(input_side, &rule_side);
        if surplus.is_empty() {
            continue;
        }

        let with_structure: Vec<(String, f64)> = missing
            .side(side)
            .iter()
            .map(|(id, &count)| (id.clone(), count))
            .collect();
        for (compound_id, count) in with_structure {
            let key = input_key(&compound_id);
            let taken = take_surplus(&mut surplus, &key, count);
            if taken <= multiset::EPSILON {
                continue;
            }
            *supplied.get_mut(side).entry(key).or_insert(0.0) += taken;

            let bucket = missing.side_mut(side);
            if count - taken > multiset::EPSILON {
                bucket.insert(compound_id, count - taken);
            } else {
                bucket.shift_remove(&compound_id);
            }
        }

        let structureless: Vec<(String, f64)> = missing
            .nostruct(side)
            .iter()
            .map(|(id, compound)| (id.clone(), compound.stoichio))
            .collect();
        for (compound_id, count) in structureless {
            let taken = take_surplus(&mut surplus, &compound_id, count);
            if taken <= multiset::EPSILON {
                continue;
            }
            *supplied.get_mut(side).entry(compound_id.clone()).or_insert(0.0) += taken;

            let bucket = missing.nostruct_mut(side);
            if count - taken > multiset::EPSILON {
                if let Some(compound) = bucket.get_mut(&compound_id) {
                    compound.stoichio = count - taken;
                }
            } else {
                bucket.shift_remove(&compound_id);
            }
        }
    }

    supplied
}

fn take_surplus(surplus: &mut Stoichiometry, key: &str, wanted: f64) -> f64 {
    match surplus.get_mut(key) {
        Some(available) => {
            let taken = available.min(wanted);
            *available -= taken;
            taken
        }
        None => 0.0,
    }
}
