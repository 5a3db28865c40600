use crate::core::models::sides::{Sides, Stoichiometry};
use crate::core::models::transformation::{Format, Transformation};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("Transformation '{0}' has no side separator, expected '>>' or '='")]
    MissingSideSeparator(String),
    #[error("Transformation '{text}' contains more than one '{separator}' side separator")]
    MultipleSideSeparators {
        text: String,
        separator: &'static str,
    },
}

/// Parses a transformation string, detecting its notation.
///
/// Tokens are trimmed, an optional leading `"<coefficient> "` is split off
/// (default coefficient 1), repeated compounds on a side are summed and empty
/// tokens are skipped.
pub fn parse_transformation(text: &str) -> Result<Transformation, NotationError> {
    let format =
        Format::detect(text).ok_or_else(|| NotationError::MissingSideSeparator(text.to_string()))?;

    let parts: Vec<&str> = text.split(format.sep_side()).collect();
    let [left, right] = parts.as_slice() else {
        return Err(NotationError::MultipleSideSeparators {
            text: text.to_string(),
            separator: format.sep_side(),
        });
    };

    let sides = Sides::new(
        parse_side(left, format.sep_cmpd()),
        parse_side(right, format.sep_cmpd()),
    );
    Ok(Transformation::new(sides, format))
}

fn parse_side(side: &str, sep_cmpd: &str) -> Stoichiometry {
    let mut compounds = Stoichiometry::new();
    for token in side.split(sep_cmpd).map(str::trim).filter(|t| !t.is_empty()) {
        let (coefficient, compound) = split_coefficient(token);
        *compounds.entry(compound.to_string()).or_insert(0.0) += coefficient;
    }
    compounds
}

fn split_coefficient(token: &str) -> (f64, &str) {
    if let Some((prefix, rest)) = token.split_once(' ') {
        let rest = rest.trim();
        if let Ok(value) = prefix.parse::<f64>() {
            if value.is_finite() && value >= 0.0 && !rest.is_empty() {
                return (value, rest);
            }
        }
    }
    (1.0, token)
}

fn render_compound(coefficient: f64, key: &str) -> String {
    if coefficient == 1.0 {
        key.to_string()
    } else {
        format!("{} {}", coefficient, key)
    }
}

/// Renders one side, substituting each key through `key_for`.
pub fn render_side_with<'a>(
    compounds: &'a Stoichiometry,
    format: Format,
    mut key_for: impl FnMut(&'a str) -> Cow<'a, str>,
) -> String {
    compounds
        .iter()
        .map(|(key, &coefficient)| render_compound(coefficient, &key_for(key.as_str())))
        .collect::<Vec<_>>()
        .join(format.sep_cmpd())
}

pub fn render_sides_with<'a>(
    sides: &'a Sides<Stoichiometry>,
    format: Format,
    mut key_for: impl FnMut(&'a str) -> Cow<'a, str>,
) -> String {
    let left = render_side_with(&sides.left, format, &mut key_for);
    let right = render_side_with(&sides.right, format, &mut key_for);
    format!("{}{}{}", left, format.sep_side(), right)
}

pub fn render_sides(sides: &Sides<Stoichiometry>, format: Format) -> String {
    render_sides_with(sides, format, Cow::Borrowed)
}

pub fn render_transformation(transformation: &Transformation) -> String {
    render_sides(&transformation.sides, transformation.format)
}
