use super::sides::{Sides, Stoichiometry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual notation a transformation was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Structures: `A.B>>C`.
    Smiles,
    /// Compound identifiers: `A+B=C`.
    Cid,
}

impl Format {
    pub fn sep_side(self) -> &'static str {
        match self {
            Format::Smiles => ">>",
            Format::Cid => "=",
        }
    }

    pub fn sep_cmpd(self) -> &'static str {
        match self {
            Format::Smiles => ".",
            Format::Cid => "+",
        }
    }

    /// Detects the notation of `text`; `>>` takes priority over `=`.
    pub fn detect(text: &str) -> Option<Self> {
        if text.contains(Format::Smiles.sep_side()) {
            Some(Format::Smiles)
        } else if text.contains(Format::Cid.sep_side()) {
            Some(Format::Cid)
        } else {
            None
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Smiles => f.write_str("smiles"),
            Format::Cid => f.write_str("cid"),
        }
    }
}

/// A (possibly partial) reaction supplied by the user.
///
/// Each side maps a compound key to its coefficient; a key appears at most
/// once per side. Keys are either all structures or all identifiers,
/// according to `format`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub sides: Sides<Stoichiometry>,
    pub format: Format,
}

impl Transformation {
    pub fn new(sides: Sides<Stoichiometry>, format: Format) -> Self {
        Self { sides, format }
    }

    pub fn sep_side(&self) -> &'static str {
        self.format.sep_side()
    }

    pub fn sep_cmpd(&self) -> &'static str {
        self.format.sep_cmpd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_reaction_arrow_over_equals_sign() {
        assert_eq!(Format::detect("C=C>>CC"), Some(Format::Smiles));
        assert_eq!(Format::detect("MNXM1+MNXM2=MNXM3"), Some(Format::Cid));
        assert_eq!(Format::detect("CCO"), None);
    }

    #[test]
    fn separators_match_notation() {
        assert_eq!((Format::Smiles.sep_side(), Format::Smiles.sep_cmpd()), (">>", "."));
        assert_eq!((Format::Cid.sep_side(), Format::Cid.sep_cmpd()), ("=", "+"));
    }
}
