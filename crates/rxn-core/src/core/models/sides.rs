use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound identifier to stoichiometric coefficient, kept in insertion order.
pub type Stoichiometry = IndexMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held once for each side of a reaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides<T> {
    pub left: T,
    pub right: T,
}

impl<T> Sides<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    pub fn swapped(mut self) -> Self {
        self.swap();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_get_mut_address_the_requested_side() {
        let mut sides = Sides::new(1, 2);
        assert_eq!(*sides.get(Side::Left), 1);
        assert_eq!(*sides.get(Side::Right), 2);
        *sides.get_mut(Side::Right) = 5;
        assert_eq!(sides.right, 5);
    }

    #[test]
    fn swapped_exchanges_left_and_right() {
        let sides = Sides::new("a", "b").swapped();
        assert_eq!(sides, Sides::new("b", "a"));
    }

    #[test]
    fn side_names_serialize_in_lowercase() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
    }
}
