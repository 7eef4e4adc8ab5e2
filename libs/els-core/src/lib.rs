//! Core library for the ELS vocabulary trainer, shared by the learner-facing
//! frontend and the relay backend.
//!
//! Provides:
//! - Static content catalog (units: reading passage + vocabulary list)
//! - Randomized multiple-choice question generation
//! - Exercise-session state machine with a per-question countdown
//! - Result payload construction and the report message template
//! - Key-value adapters for unit progress and profile/voice prefill

pub mod catalog;
pub mod error;
pub mod flashcards;
pub mod generator;
pub mod progress;
pub mod report;
pub mod session;
pub mod speech;
pub mod timer;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ProfileError, SessionError};
pub use generator::{generate, generate_grand_test, Question};
pub use report::{format_message, ReportSink, ResultPayload, StudentData};
pub use session::{
    Advance, AnswerFeedback, ExerciseSession, SessionOutcome, SessionStatus, SessionTick,
};
pub use types::{
    ExerciseMode, QuestionKind, Score, StudentProfile, Unit, UnitRef, VocabularyEntry,
};
