use crate::core::models::sides::Stoichiometry;

/// Counts below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// `minuend - subtrahend`, capped at zero.
///
/// Iterates `minuend` in order; compounds whose remaining count is zero (or
/// would be negative) are omitted.
pub fn difference(minuend: &Stoichiometry, subtrahend: &Stoichiometry) -> Stoichiometry {
    minuend
        .iter()
        .filter_map(|(id, &count)| {
            let remaining = count - subtrahend.get(id).copied().unwrap_or(0.0);
            (remaining > EPSILON).then(|| (id.clone(), remaining))
        })
        .collect()
}

/// Compounds whose count in `subtrahend` exceeds their count in `minuend`,
/// with the excess.
pub fn excess(minuend: &Stoichiometry, subtrahend: &Stoichiometry) -> Stoichiometry {
    difference(subtrahend, minuend)
}

/// Builds a multiset from repeated occurrences, in first-seen order.
pub fn tally<'a>(occurrences: impl IntoIterator<Item = &'a str>) -> Stoichiometry {
    let mut counts = Stoichiometry::new();
    for id in occurrences {
        *counts.entry(id.to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Adds every count of `addend` into `target`, creating missing entries at zero.
pub fn merge_add<'a>(target: &mut Stoichiometry, addend: impl IntoIterator<Item = (&'a str, f64)>) {
    for (id, count) in addend {
        *target.entry(id.to_string()).or_insert(0.0) += count;
    }
}

pub fn total(counts: &Stoichiometry) -> f64 {
    counts.values().sum()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
