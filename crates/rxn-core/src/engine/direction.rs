use super::config::ConfigError;
use crate::core::models::reaction::{ReactionRule, RelativeDirection, TemplateReaction};
use crate::core::models::sides::{Sides, Stoichiometry};
use std::fmt;
use std::str::FromStr;

/// Orientation of the user's transformation relative to the rule's main substrate side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    #[default]
    Reverse,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            _ => Err(ConfigError::InvalidValue {
                parameter: "direction",
                value: s.to_string(),
                expected: "forward, reverse",
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Reverse => f.write_str("reverse"),
        }
    }
}

/// Local copies of a rule and its template, both oriented like the user's transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct Oriented {
    pub rule: ReactionRule,
    pub template: Sides<Stoichiometry>,
}

/// Orients `rule` and `template` so that "left" and "right" match the caller's
/// transformation.
///
/// A forward request reverses the rule first; the template is then swapped
/// whenever the resulting rule is reversed relative to it.
pub fn normalize(
    rule: &ReactionRule,
    template: &TemplateReaction,
    direction: Direction,
) -> Oriented {
    let rule = match direction {
        Direction::Forward => rule.reversed(),
        Direction::Reverse => rule.clone(),
    };
    let mut template = template.to_sides();
    if rule.rel_direction == RelativeDirection::Reversed {
        template.swap();
    }
    Oriented { rule, template }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn rule(rel_direction: RelativeDirection) -> ReactionRule {
        ReactionRule {
            rule_id: "RR-1".to_string(),
            rule_score: None,
            reac_id: None,
            subs_id: None,
            rel_direction,
            left: indexmap! { "MNXM179".to_string() => 1.0 },
            right: indexmap! { "MNXM22".to_string() => 1.0, "MNXM23".to_string() => 1.0 },
            left_excluded: Some(vec!["MNXM4".to_string()]),
            right_excluded: Some(vec![]),
        }
    }

    fn template() -> TemplateReaction {
        TemplateReaction {
            left: indexmap! { "MNXM179".to_string() => 1.0, "MNXM4".to_string() => 1.0 },
            right: indexmap! { "MNXM22".to_string() => 1.0, "MNXM23".to_string() => 1.0 },
        }
    }

    #[test]
    fn reverse_with_same_orientation_keeps_everything() {
        let oriented = normalize(&rule(RelativeDirection::Same), &template(), Direction::Reverse);
        assert_eq!(oriented.rule, rule(RelativeDirection::Same));
        assert_eq!(oriented.template, template().to_sides());
    }

    #[test]
    fn reverse_with_reversed_rule_swaps_only_the_template() {
        let oriented = normalize(
            &rule(RelativeDirection::Reversed),
            &template(),
            Direction::Reverse,
        );
        assert_eq!(oriented.rule.left, rule(RelativeDirection::Reversed).left);
        assert_eq!(oriented.template, template().to_sides().swapped());
    }

    #[test]
    fn forward_swaps_rule_and_then_template() {
        let oriented = normalize(&rule(RelativeDirection::Same), &template(), Direction::Forward);

        assert_eq!(oriented.rule.rel_direction, RelativeDirection::Reversed);
        assert_eq!(oriented.rule.left, rule(RelativeDirection::Same).right);
        assert_eq!(oriented.rule.right_excluded, Some(vec!["MNXM4".to_string()]));
        assert_eq!(oriented.template.right, template().left);
        assert_eq!(oriented.template.left, template().right);
    }

    #[test]
    fn forward_on_reversed_rule_leaves_template_as_stored() {
        let oriented = normalize(
            &rule(RelativeDirection::Reversed),
            &template(),
            Direction::Forward,
        );
        assert_eq!(oriented.rule.rel_direction, RelativeDirection::Same);
        assert_eq!(oriented.template, template().to_sides());
    }

    #[test]
    fn inputs_are_never_mutated() {
        let original_rule = rule(RelativeDirection::Same);
        let original_template = template();
        for _ in 0..2 {
            normalize(&original_rule, &original_template, Direction::Forward);
        }
        assert_eq!(original_rule, rule(RelativeDirection::Same));
        assert_eq!(original_template, template());
    }

    #[test]
    fn direction_parses_from_text() {
        assert_eq!("forward".parse(), Ok(Direction::Forward));
        assert_eq!(" Reverse ".parse(), Ok(Direction::Reverse));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
