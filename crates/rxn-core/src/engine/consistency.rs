use super::diagnostics::{Diagnostic, Diagnostics};
use crate::core::models::sides::{Side, Sides, Stoichiometry};
use crate::core::utils::multiset;

fn compare_totals(
    actual: &Sides<Stoichiometry>,
    expected: Sides<&Stoichiometry>,
    diagnostics: &mut Diagnostics,
    report: impl Fn(Side, Stoichiometry, Stoichiometry) -> Diagnostic,
) -> bool {
    let mut consistent = true;
    for side in Side::BOTH {
        let actual_side = actual.get(side);
        let expected_side = *expected.get(side);
        if !multiset::approx_eq(multiset::total(actual_side), multiset::total(expected_side)) {
            consistent = false;
            diagnostics.push(report(side, actual_side.clone(), expected_side.clone()));
        }
    }
    consistent
}

/// Checks that each side of the completed transformation holds as many
/// compounds, stoichiometry included, as the template side.
pub fn check_completed(
    completed: &Sides<Stoichiometry>,
    template: &Sides<Stoichiometry>,
    diagnostics: &mut Diagnostics,
) -> bool {
    compare_totals(
        completed,
        Sides::new(&template.left, &template.right),
        diagnostics,
        |side, completed, template| Diagnostic::StoichiometryMismatch {
            side,
            completed,
            template,
        },
    )
}

/// Checks that the user's transformation holds as many compounds per side as
/// the (oriented) rule it is completed with.
pub fn check_input(
    input: &Sides<Stoichiometry>,
    rule: Sides<&Stoichiometry>,
    diagnostics: &mut Diagnostics,
) -> bool {
    compare_totals(input, rule, diagnostics, |side, input, rule| {
        Diagnostic::InputRuleMismatch { side, input, rule }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn sides(left: &[(&str, f64)], right: &[(&str, f64)]) -> Sides<Stoichiometry> {
        let to_map = |pairs: &[(&str, f64)]| -> Stoichiometry {
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
        };
        Sides::new(to_map(left), to_map(right))
    }

    #[test]
    fn matching_totals_are_consistent_regardless_of_keys() {
        let completed = sides(&[("CCO", 1.0), ("MNXM4", 1.0)], &[("CC=O", 2.0)]);
        let template = sides(&[("MNXM1", 1.0), ("MNXM4", 1.0)], &[("MNXM2", 1.0), ("MNXM3", 1.0)]);
        let mut diagnostics = Diagnostics::new();

        assert!(check_completed(&completed, &template, &mut diagnostics));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn mismatch_is_reported_per_side_with_both_contents() {
        let completed = sides(&[("A", 1.0), ("D", 1.0)], &[("B", 1.0)]);
        let template = sides(&[("A", 1.0), ("D", 1.0)], &[("B", 1.0), ("C", 1.0)]);
        let mut diagnostics = Diagnostics::new();

        assert!(!check_completed(&completed, &template, &mut diagnostics));
        assert_eq!(
            diagnostics.entries(),
            &[Diagnostic::StoichiometryMismatch {
                side: Side::Right,
                completed: indexmap! { "B".to_string() => 1.0 },
                template: indexmap! { "B".to_string() => 1.0, "C".to_string() => 1.0 },
            }]
        );
    }

    #[test]
    fn input_is_compared_with_rule() {
        let input = sides(&[("A", 1.0)], &[("B", 1.0)]);
        let rule = sides(&[("MNXM1", 1.0)], &[("MNXM2", 1.0), ("MNXM3", 1.0)]);
        let mut diagnostics = Diagnostics::new();

        assert!(!check_input(
            &input,
            Sides::new(&rule.left, &rule.right),
            &mut diagnostics
        ));
        assert!(matches!(
            diagnostics.entries(),
            [Diagnostic::InputRuleMismatch { side: Side::Right, .. }]
        ));
    }
}
