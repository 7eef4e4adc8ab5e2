//! Randomized multiple-choice question generation.
//!
//! Every entry point takes a caller-supplied `Rng` so tests can inject a
//! seeded generator. Selection is always shuffle-then-prefix, and the final
//! option order gets its own shuffle so the correct answer's position stays
//! uniform.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{QuestionKind, VocabularyEntry};

/// Blank marker substituted into gap-fill prompts.
pub const BLANK_MARKER: &str = "______";

/// Number of options in a fully populated question (1 correct + 3 distractors).
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
    pub kind: QuestionKind,
}

/// Generate `count` questions of one kind from `pool`.
///
/// `count` is clamped to the pool size. With fewer than four pool entries a
/// question degrades to however many distinct options remain; this is an
/// accepted edge case, not an error.
pub fn generate(
    pool: &[VocabularyEntry],
    kind: QuestionKind,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut picked: Vec<&VocabularyEntry> = pool.iter().collect();
    picked.shuffle(rng);
    picked.truncate(count.min(pool.len()));

    let mut questions: Vec<Question> = picked
        .into_iter()
        .map(|entry| build_question(pool, entry, kind, rng))
        .collect();
    questions.shuffle(rng);
    questions
}

/// Generate a cross-unit grand test: `size / 4` questions of each kind,
/// interleaved by a final shuffle.
pub fn generate_grand_test(
    pool: &[VocabularyEntry],
    size: u32,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let per_kind = (size / 4) as usize;
    let mut questions = Vec::with_capacity(per_kind * QuestionKind::ALL.len());
    for kind in QuestionKind::ALL {
        questions.extend(generate(pool, kind, per_kind, rng));
    }
    questions.shuffle(rng);
    questions
}

fn build_question(
    pool: &[VocabularyEntry],
    correct: &VocabularyEntry,
    kind: QuestionKind,
    rng: &mut impl Rng,
) -> Question {
    let correct_text = option_text(correct, kind).to_string();

    let mut wrong_pool: Vec<&VocabularyEntry> =
        pool.iter().filter(|e| e.word != correct.word).collect();
    wrong_pool.shuffle(rng);

    let mut options = vec![correct_text.clone()];
    for entry in wrong_pool {
        if options.len() == OPTIONS_PER_QUESTION {
            break;
        }
        let text = option_text(entry, kind);
        // Definitions and translations can repeat across units; options must
        // stay distinct by value.
        if options.iter().any(|o| o == text) {
            continue;
        }
        options.push(text.to_string());
    }
    options.shuffle(rng);

    Question {
        prompt: prompt_text(correct, kind),
        options,
        correct: correct_text,
        kind,
    }
}

fn option_text(entry: &VocabularyEntry, kind: QuestionKind) -> &str {
    match kind {
        QuestionKind::DefinitionMatch => &entry.definition,
        QuestionKind::EngToNative => &entry.translation,
        QuestionKind::NativeToEng | QuestionKind::GapFill => &entry.word,
    }
}

fn prompt_text(entry: &VocabularyEntry, kind: QuestionKind) -> String {
    match kind {
        QuestionKind::DefinitionMatch | QuestionKind::EngToNative => entry.word.clone(),
        QuestionKind::NativeToEng => entry.translation.clone(),
        QuestionKind::GapFill => {
            let sentence = format!(
                "The concept of {} is important in modern society.",
                entry.word
            );
            sentence.replacen(&entry.word, BLANK_MARKER, 1)
        }
    }
}
