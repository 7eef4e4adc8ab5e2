//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// One vocabulary item: the English word, its English definition, and the
/// learner-language translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
    pub translation: String,
}

/// A thematic bundle of one reading passage plus its vocabulary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u32,
    pub title: String,
    pub text: String,
    pub words: Vec<VocabularyEntry>,
}

impl Unit {
    /// Lightweight reference used in exercise modes and result payloads.
    pub fn to_ref(&self) -> UnitRef {
        UnitRef {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Unit identity carried through reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRef {
    pub id: u32,
    pub title: String,
}

/// Exercise question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    DefinitionMatch,
    EngToNative,
    NativeToEng,
    GapFill,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        Self::DefinitionMatch,
        Self::EngToNative,
        Self::NativeToEng,
        Self::GapFill,
    ];

    /// Human-readable label shown alongside a question.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DefinitionMatch => "Matching Definition",
            Self::EngToNative => "English → Uzbek",
            Self::NativeToEng => "Uzbek → English",
            Self::GapFill => "Gap-Filling",
        }
    }
}

/// Running score of an exercise session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

/// Default grand-test size offered by the setup screen.
pub const DEFAULT_GRAND_TEST_SIZE: u32 = 50;

/// What an exercise session is running against: a single unit, or the
/// cross-unit grand test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMode {
    pub unit: Option<UnitRef>,
    pub is_grand_test: bool,
    pub grand_test_size: u32,
}

impl ExerciseMode {
    pub fn unit_exercise(unit: &Unit) -> Self {
        Self {
            unit: Some(unit.to_ref()),
            is_grand_test: false,
            grand_test_size: DEFAULT_GRAND_TEST_SIZE,
        }
    }

    pub fn grand_test(size: u32) -> Self {
        Self {
            unit: None,
            is_grand_test: true,
            grand_test_size: size,
        }
    }
}

/// Student identity captured once at entry. Immutable for the process
/// lifetime; name and surname are also persisted for prefill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub surname: String,
    pub group: String,
    pub entry_time: DateTime<Utc>,
}

impl StudentProfile {
    /// Build a profile from trimmed entry-form input.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingField` if any field is empty after
    /// trimming.
    pub fn new(
        name: &str,
        surname: &str,
        group: &str,
        entry_time: DateTime<Utc>,
    ) -> Result<Self, ProfileError> {
        let name = name.trim();
        let surname = surname.trim();
        let group = group.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingField { field: "name" });
        }
        if surname.is_empty() {
            return Err(ProfileError::MissingField { field: "surname" });
        }
        if group.is_empty() {
            return Err(ProfileError::MissingField { field: "group" });
        }
        Ok(Self {
            name: name.to_string(),
            surname: surname.to_string(),
            group: group.to_string(),
            entry_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_trims_input() {
        let profile = StudentProfile::new("  Aziza ", "Karimova", "G-12", Utc::now()).unwrap();
        assert_eq!(profile.name, "Aziza");
        assert_eq!(profile.surname, "Karimova");
    }

    #[test]
    fn profile_rejects_blank_group() {
        let err = StudentProfile::new("Aziza", "Karimova", "   ", Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: group");
    }

    #[test]
    fn kind_labels() {
        assert_eq!(QuestionKind::DefinitionMatch.label(), "Matching Definition");
        assert_eq!(QuestionKind::GapFill.label(), "Gap-Filling");
    }
}
