//! Static content catalog: the built-in units with their reading passages
//! and vocabulary lists.
//!
//! The catalog is immutable at runtime. Uniqueness of `word` within a unit
//! is validated on load; distractor sampling and gap-fill substitution rely
//! on it.

use std::sync::LazyLock;

use crate::error::CatalogError;
use crate::types::{Unit, VocabularyEntry};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("../data/units.json"))
        .expect("embedded unit data is validated by tests")
});

/// The fixed set of units available to the learner.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// The built-in catalog shipped with the application.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the data is malformed, empty, has a
    /// non-positive or duplicate unit id, an empty word list, or a repeated
    /// word within one unit.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let units: Vec<Unit> = serde_json::from_str(raw)?;
        Self::validate(&units)?;
        Ok(Self { units })
    }

    fn validate(units: &[Unit]) -> Result<(), CatalogError> {
        if units.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen_ids = Vec::with_capacity(units.len());
        for (index, unit) in units.iter().enumerate() {
            if unit.id < 1 {
                return Err(CatalogError::InvalidId { index, id: unit.id });
            }
            if seen_ids.contains(&unit.id) {
                return Err(CatalogError::DuplicateUnitId { id: unit.id });
            }
            seen_ids.push(unit.id);
            if unit.words.is_empty() {
                return Err(CatalogError::NoWords { id: unit.id });
            }
            for (i, entry) in unit.words.iter().enumerate() {
                if unit.words[..i].iter().any(|e| e.word == entry.word) {
                    return Err(CatalogError::DuplicateWord {
                        id: unit.id,
                        word: entry.word.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: u32) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Case-insensitive title search, as used by the unit filter box.
    pub fn search(&self, query: &str) -> Vec<&Unit> {
        let query = query.to_lowercase();
        self.units
            .iter()
            .filter(|u| u.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Pool every unit's vocabulary for the grand test.
    pub fn all_words(&self) -> Vec<VocabularyEntry> {
        self.units.iter().flat_map(|u| u.words.clone()).collect()
    }
}
