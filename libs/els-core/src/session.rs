//! Exercise-session state machine.
//!
//! One session drives a fixed question sequence: per-question countdown, a
//! single accepted answer, score accumulation, and exactly one outcome —
//! either natural completion or an early abort. Duplicate UI events
//! (double-clicks, a navigation followed by tab close) are no-ops, never
//! errors.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::generator::Question;
use crate::timer::{CountdownTimer, Tick, QUESTION_TIME_SECS};
use crate::types::{ExerciseMode, Score};

/// Final status of a session, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Completed,
    Incomplete,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
        }
    }
}

/// Feedback for one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub timed_out: bool,
    pub correct_answer: String,
}

/// Result of driving the countdown one second forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTick {
    Countdown { remaining: u32, warning: bool },
    TimedOut(AnswerFeedback),
    Idle,
}

/// Result of an `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next,
    Completed(SessionOutcome),
    Ignored,
}

/// Snapshot emitted exactly once when a session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub status: SessionStatus,
    pub score: Score,
    pub total: u32,
    pub answered: u32,
    pub percentage: u32,
    pub mode: ExerciseMode,
    pub reason: Option<String>,
}

impl SessionOutcome {
    /// Free-text block appended to incomplete reports. Empty for completed
    /// sessions.
    pub fn extra_details(&self) -> String {
        match self.status {
            SessionStatus::Completed => String::new(),
            SessionStatus::Incomplete => {
                let mut extra = format!(
                    "Answered: {}/{}\n✅ Correct: {}\n❌ Wrong: {}",
                    self.answered, self.total, self.score.correct, self.score.wrong
                );
                if let Some(reason) = &self.reason {
                    extra.push_str("\nNote: ");
                    extra.push_str(reason);
                }
                extra
            }
        }
    }
}

/// One exercise attempt, constructed fresh per run and owned by the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    questions: Vec<Question>,
    current_index: usize,
    answered: bool,
    chosen: Option<String>,
    score: Score,
    mode: ExerciseMode,
    active: bool,
    reported: bool,
    timer: CountdownTimer,
}

impl ExerciseSession {
    /// Start a session over `questions`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` for an empty sequence; a session
    /// with nothing to ask must fail fast instead of silently completing.
    pub fn start(questions: Vec<Question>, mode: ExerciseMode) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            questions,
            current_index: 0,
            answered: false,
            chosen: None,
            score: Score::default(),
            mode,
            active: true,
            reported: false,
            timer: CountdownTimer::new(QUESTION_TIME_SECS),
        })
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.active {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn mode(&self) -> &ExerciseMode {
        &self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Option the learner picked for the current question, for UI feedback.
    pub fn chosen_option(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// Questions advanced past, counting the current one once answered.
    pub fn answered_count(&self) -> u32 {
        self.current_index as u32 + u32::from(self.answered)
    }

    /// `round(100 * correct / total)`, half away from zero.
    pub fn percentage(&self) -> u32 {
        percentage(self.score.correct, self.total())
    }

    /// Accept an answer for the current question. No-op (returns `None`) if
    /// the question was already answered or the session is not active.
    pub fn submit_answer(&mut self, selected: &str) -> Option<AnswerFeedback> {
        if !self.active || self.answered {
            return None;
        }
        let correct_answer = self.questions[self.current_index].correct.clone();
        self.timer.cancel();
        self.answered = true;
        self.chosen = Some(selected.to_string());
        let is_correct = selected == correct_answer;
        if is_correct {
            self.score.correct += 1;
        } else {
            self.score.wrong += 1;
        }
        Some(AnswerFeedback {
            is_correct,
            timed_out: false,
            correct_answer,
        })
    }

    /// Drive the per-question countdown one second forward. Expiry counts as
    /// an implicit wrong answer, exactly once.
    pub fn tick(&mut self) -> SessionTick {
        if !self.active || self.answered {
            return SessionTick::Idle;
        }
        match self.timer.tick() {
            Tick::Running { remaining, warning } => {
                SessionTick::Countdown { remaining, warning }
            }
            Tick::Expired => match self.time_expire() {
                Some(feedback) => SessionTick::TimedOut(feedback),
                None => SessionTick::Idle,
            },
            Tick::Idle => SessionTick::Idle,
        }
    }

    /// Treat the current question as timed out. No-op once answered.
    pub fn time_expire(&mut self) -> Option<AnswerFeedback> {
        if !self.active || self.answered {
            return None;
        }
        self.timer.cancel();
        self.answered = true;
        self.chosen = None;
        self.score.wrong += 1;
        Some(AnswerFeedback {
            is_correct: false,
            timed_out: true,
            correct_answer: self.questions[self.current_index].correct.clone(),
        })
    }

    /// Move past an answered question. Completes the session after the last
    /// one; otherwise restarts the countdown for the next question.
    pub fn advance(&mut self) -> Advance {
        if !self.active || !self.answered {
            return Advance::Ignored;
        }
        self.current_index += 1;
        if self.current_index == self.questions.len() {
            // Clear the answered flag so answered_count stays equal to the
            // question total in the emitted outcome.
            self.answered = false;
            self.active = false;
            self.reported = true;
            Advance::Completed(self.outcome(SessionStatus::Completed, None))
        } else {
            self.answered = false;
            self.chosen = None;
            self.timer = CountdownTimer::new(QUESTION_TIME_SECS);
            Advance::Next
        }
    }

    /// End the session early. Idempotent: returns `None` once an outcome has
    /// been emitted, so a navigation event followed by an unload event yields
    /// a single incomplete report.
    pub fn abort(&mut self, reason: &str) -> Option<SessionOutcome> {
        if !self.active || self.reported {
            return None;
        }
        self.timer.cancel();
        let outcome = self.outcome(SessionStatus::Incomplete, Some(reason.to_string()));
        self.active = false;
        self.reported = true;
        self.answered = false;
        Some(outcome)
    }

    fn outcome(&self, status: SessionStatus, reason: Option<String>) -> SessionOutcome {
        SessionOutcome {
            status,
            score: self.score,
            total: self.total(),
            answered: self.answered_count(),
            percentage: self.percentage(),
            mode: self.mode.clone(),
            reason,
        }
    }
}

/// Deterministic percentage rounding shared with reports.
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(correct) / f64::from(total)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;
    use pretty_assertions::assert_eq;

    fn question(i: usize) -> Question {
        Question {
            prompt: format!("prompt{i}"),
            options: vec![
                format!("right{i}"),
                "wrong-a".to_string(),
                "wrong-b".to_string(),
                "wrong-c".to_string(),
            ],
            correct: format!("right{i}"),
            kind: QuestionKind::DefinitionMatch,
        }
    }

    fn questions(n: usize) -> Vec<Question> {
        (0..n).map(question).collect()
    }

    fn unit_mode() -> ExerciseMode {
        ExerciseMode {
            unit: Some(crate::types::UnitRef {
                id: 2,
                title: "Bringing Back Lost Memories".to_string(),
            }),
            is_grand_test: false,
            grand_test_size: 50,
        }
    }

    #[test]
    fn rejects_empty_question_list() {
        let err = ExerciseSession::start(vec![], unit_mode()).unwrap_err();
        assert_eq!(err, SessionError::NoQuestions);
    }

    #[test]
    fn completes_with_seven_of_ten() {
        let mut session = ExerciseSession::start(questions(10), unit_mode()).unwrap();
        for i in 0..10 {
            let answer = if i < 7 {
                format!("right{i}")
            } else {
                "wrong-a".to_string()
            };
            let feedback = session.submit_answer(&answer).unwrap();
            assert_eq!(feedback.is_correct, i < 7);
            match session.advance() {
                Advance::Next => assert!(i < 9),
                Advance::Completed(outcome) => {
                    assert_eq!(i, 9);
                    assert_eq!(outcome.status, SessionStatus::Completed);
                    assert_eq!(outcome.score.correct, 7);
                    assert_eq!(outcome.score.wrong, 3);
                    assert_eq!(outcome.percentage, 70);
                    assert_eq!(outcome.answered, 10);
                    assert_eq!(outcome.extra_details(), "");
                }
                Advance::Ignored => panic!("advance ignored after answer"),
            }
        }
        assert!(!session.is_active());
    }

    #[test]
    fn second_answer_is_ignored() {
        let mut session = ExerciseSession::start(questions(3), unit_mode()).unwrap();
        assert!(session.submit_answer("right0").is_some());
        assert!(session.submit_answer("wrong-a").is_none());
        assert_eq!(session.score(), Score { correct: 1, wrong: 0 });
    }

    #[test]
    fn advance_before_answer_is_ignored() {
        let mut session = ExerciseSession::start(questions(3), unit_mode()).unwrap();
        assert_eq!(session.advance(), Advance::Ignored);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn timeout_counts_as_wrong_once() {
        let mut session = ExerciseSession::start(questions(2), unit_mode()).unwrap();
        for _ in 0..29 {
            assert!(matches!(session.tick(), SessionTick::Countdown { .. }));
        }
        match session.tick() {
            SessionTick::TimedOut(feedback) => {
                assert!(feedback.timed_out);
                assert!(!feedback.is_correct);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(session.score(), Score { correct: 0, wrong: 1 });
        // Further ticks and a late expiry are no-ops.
        assert_eq!(session.tick(), SessionTick::Idle);
        assert!(session.time_expire().is_none());
        assert_eq!(session.score(), Score { correct: 0, wrong: 1 });
    }

    #[test]
    fn tick_after_answer_never_mutates_score() {
        let mut session = ExerciseSession::start(questions(2), unit_mode()).unwrap();
        session.submit_answer("right0").unwrap();
        for _ in 0..60 {
            assert_eq!(session.tick(), SessionTick::Idle);
        }
        assert_eq!(session.score(), Score { correct: 1, wrong: 0 });
    }

    #[test]
    fn timer_restarts_on_advance() {
        let mut session = ExerciseSession::start(questions(2), unit_mode()).unwrap();
        for _ in 0..20 {
            session.tick();
        }
        session.submit_answer("right0").unwrap();
        assert_eq!(session.advance(), Advance::Next);
        assert_eq!(
            session.tick(),
            SessionTick::Countdown {
                remaining: QUESTION_TIME_SECS - 1,
                warning: false
            }
        );
    }

    #[test]
    fn score_bound_holds_at_every_step() {
        let mut session = ExerciseSession::start(questions(5), unit_mode()).unwrap();
        for i in 0..5 {
            let score = session.score();
            assert!(score.correct + score.wrong <= session.answered_count());
            session.submit_answer(&format!("right{i}")).unwrap();
            let score = session.score();
            assert!(score.correct + score.wrong <= session.answered_count());
            session.advance();
        }
    }

    #[test]
    fn abort_mid_session_reports_incomplete() {
        let mut session = ExerciseSession::start(questions(10), unit_mode()).unwrap();
        for i in 0..3 {
            session.submit_answer(&format!("right{i}")).unwrap();
            session.advance();
        }
        session.submit_answer("wrong-a").unwrap();
        // Answered 4 of 10 (3 correct, 1 wrong), then navigated away.
        let outcome = session.abort("Returned to main page").unwrap();
        assert_eq!(outcome.status, SessionStatus::Incomplete);
        assert_eq!(outcome.answered, 4);
        let extra = outcome.extra_details();
        assert!(extra.contains("Answered: 4/10"), "extra: {extra}");
        assert!(extra.contains("✅ Correct: 3"));
        assert!(extra.contains("❌ Wrong: 1"));
        assert!(extra.contains("Note: Returned to main page"));
    }

    #[test]
    fn abort_is_idempotent() {
        let mut session = ExerciseSession::start(questions(4), unit_mode()).unwrap();
        session.submit_answer("right0").unwrap();
        assert!(session.abort("Returned to unit page").is_some());
        assert!(session.abort("Browser closed during exercise").is_none());
    }

    #[test]
    fn abort_after_completion_is_ignored() {
        let mut session = ExerciseSession::start(questions(1), unit_mode()).unwrap();
        session.submit_answer("right0").unwrap();
        assert!(matches!(session.advance(), Advance::Completed(_)));
        assert!(session.abort("Browser closed during exercise").is_none());
    }

    #[test]
    fn answered_count_never_exceeds_total() {
        let mut session = ExerciseSession::start(questions(1), unit_mode()).unwrap();
        session.submit_answer("right0").unwrap();
        match session.advance() {
            Advance::Completed(outcome) => {
                assert_eq!(outcome.answered, 1);
                assert_eq!(outcome.total, 1);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(7, 10), 70);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }
}
