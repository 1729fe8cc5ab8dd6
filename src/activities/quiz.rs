//! Multiple-choice quiz run

use super::{ActivityKind, ActivityOutcome};
use crate::models::catalog::{QuizQuestion, QUIZ_QUESTIONS};

pub const EXPERIENCE_PER_CORRECT: u64 = 20;
pub const PERFECT_BADGE: &str = "Perfect Quiz!";

/// Progress through the question bank
#[derive(Debug, Clone)]
pub struct QuizRun {
    questions: &'static [QuizQuestion],
    current: usize,
    selected: Option<usize>,
    correct_answers: usize,
}

impl QuizRun {
    pub fn new() -> Self {
        Self::with_questions(QUIZ_QUESTIONS)
    }

    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            correct_answers: 0,
        }
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Zero-based index of the current question
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Record an answer for the current question. Only the first answer
    /// counts. Returns whether the recorded answer is correct.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        if self.selected.is_some() || option >= self.question().options.len() {
            return None;
        }
        self.selected = Some(option);
        let correct = option == self.question().correct;
        if correct {
            self.correct_answers += 1;
        }
        Some(correct)
    }

    /// Move past an answered question. Returns the outcome once the last
    /// question has been answered.
    pub fn next(&mut self) -> Option<ActivityOutcome> {
        self.selected?;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            return None;
        }
        Some(self.outcome())
    }

    fn outcome(&self) -> ActivityOutcome {
        let outcome = ActivityOutcome::new(
            ActivityKind::Quiz,
            self.correct_answers as u64 * EXPERIENCE_PER_CORRECT,
        );
        if self.correct_answers == self.questions.len() {
            outcome.with_badge(PERFECT_BADGE)
        } else {
            outcome
        }
    }
}

impl Default for QuizRun {
    fn default() -> Self {
        Self::new()
    }
}
