use serde::{Deserialize, Serialize};

/// Structural record of a compound as stored in the compound cache.
///
/// Only `smiles` matters to the completion engine; the other descriptive
/// fields are carried through for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundRecord {
    #[serde(default)]
    pub smiles: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inchi: Option<String>,
    #[serde(default)]
    pub inchikey: Option<String>,
}

impl CompoundRecord {
    pub fn with_smiles(smiles: impl Into<String>) -> Self {
        Self {
            smiles: Some(smiles.into()),
            ..Self::default()
        }
    }

    /// The SMILES string, or `None` when absent or blank.
    pub fn structure(&self) -> Option<&str> {
        self.smiles
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
