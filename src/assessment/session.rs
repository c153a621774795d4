//! Quiz session state machine.
//!
//! `InProgress` → `Scoring` → `Complete`. Each transition takes the current
//! state by reference and returns the next one; callers replace their value.
//! `Scoring` is consumed by [`crate::engine::AssessmentEngine::complete`].

use super::questions::{QUESTION_COUNT, Question, question_at};
use super::types::Choice;
use crate::engine::Completion;
use crate::error::{AssessmentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded answers keyed by 0-based question index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<usize, Choice>,
}

impl AnswerSet {
    /// Record (or overwrite) the answer for `index`.
    pub fn record(&mut self, index: usize, choice: Choice) -> Result<()> {
        if index >= QUESTION_COUNT {
            return Err(AssessmentError::InvalidTransition {
                action: format!("record answer for question index {index}"),
                state: format!("only {QUESTION_COUNT} questions exist"),
            });
        }
        self.answers.insert(index, choice);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<Choice> {
        self.answers.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Choice)> + '_ {
        self.answers.iter().map(|(i, c)| (*i, *c))
    }
}

#[derive(Debug, Clone)]
pub enum SessionState {
    InProgress {
        index: usize,
        answers: AnswerSet,
        retake: bool,
    },
    /// All answers recorded; waiting for the engine to score and persist.
    Scoring { answers: AnswerSet, retake: bool },
    Complete(Box<Completion>),
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::start(false)
    }

    /// Fresh session whose completion updates the stored result in place.
    pub fn retake() -> Self {
        Self::start(true)
    }

    pub fn start(retake: bool) -> Self {
        SessionState::InProgress {
            index: 0,
            answers: AnswerSet::default(),
            retake,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SessionState::InProgress { .. } => "in progress",
            SessionState::Scoring { .. } => "scoring",
            SessionState::Complete(_) => "complete",
        }
    }

    fn invalid(&self, action: &str) -> AssessmentError {
        AssessmentError::InvalidTransition {
            action: action.to_string(),
            state: self.name().to_string(),
        }
    }

    /// Record `choice` for the current question and advance. Answering the
    /// last question moves to `Scoring`.
    pub fn answer(&self, choice: Choice) -> Result<Self> {
        let SessionState::InProgress {
            index,
            answers,
            retake,
        } = self
        else {
            return Err(self.invalid("answer"));
        };

        let mut answers = answers.clone();
        answers.record(*index, choice)?;

        if *index + 1 < QUESTION_COUNT {
            Ok(SessionState::InProgress {
                index: index + 1,
                answers,
                retake: *retake,
            })
        } else {
            Ok(SessionState::Scoring {
                answers,
                retake: *retake,
            })
        }
    }

    /// Step back one question. A no-op at index 0; recorded answers are kept.
    pub fn previous(&self) -> Result<Self> {
        match self {
            SessionState::InProgress {
                index,
                answers,
                retake,
            } => Ok(SessionState::InProgress {
                index: index.saturating_sub(1),
                answers: answers.clone(),
                retake: *retake,
            }),
            _ => Err(self.invalid("go back")),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SessionState::InProgress { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn answers(&self) -> Option<&AnswerSet> {
        match self {
            SessionState::InProgress { answers, .. } | SessionState::Scoring { answers, .. } => {
                Some(answers)
            }
            SessionState::Complete(_) => None,
        }
    }

    pub fn is_retake(&self) -> bool {
        match self {
            SessionState::InProgress { retake, .. } | SessionState::Scoring { retake, .. } => {
                *retake
            }
            SessionState::Complete(c) => c.retake,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.index().and_then(question_at)
    }

    /// Answer previously recorded for `index`, if any.
    pub fn recorded_answer(&self, index: usize) -> Option<Choice> {
        self.answers().and_then(|a| a.get(index))
    }

    /// Progress bar value: `(index + 1) / 48 * 100` while in progress.
    pub fn progress_percent(&self) -> f32 {
        match self {
            SessionState::InProgress { index, .. } => {
                ((index + 1) as f32 / QUESTION_COUNT as f32) * 100.0
            }
            _ => 100.0,
        }
    }

    pub fn is_scoring(&self) -> bool {
        matches!(self, SessionState::Scoring { .. })
    }

    pub fn completion(&self) -> Option<&Completion> {
        match self {
            SessionState::Complete(c) => Some(&**c),
            _ => None,
        }
    }
}
