//! Tally trait contributions and derive the four-letter type.
//! Pure and deterministic: same answers, same type and tally.

use super::questions::{QUESTION_COUNT, QUESTIONS};
use super::session::AnswerSet;
use super::types::{Dimension, PersonalityType, Trait};
use crate::error::{AssessmentError, Result};
use serde::{Deserialize, Serialize};

/// Per-letter answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "N")]
    pub n: u32,
    #[serde(rename = "T")]
    pub t: u32,
    #[serde(rename = "F")]
    pub f: u32,
    #[serde(rename = "J")]
    pub j: u32,
    #[serde(rename = "P")]
    pub p: u32,
}

impl ScoreTally {
    pub fn get(&self, letter: Trait) -> u32 {
        match letter {
            Trait::E => self.e,
            Trait::I => self.i,
            Trait::S => self.s,
            Trait::N => self.n,
            Trait::T => self.t,
            Trait::F => self.f,
            Trait::J => self.j,
            Trait::P => self.p,
        }
    }

    fn slot(&mut self, letter: Trait) -> &mut u32 {
        match letter {
            Trait::E => &mut self.e,
            Trait::I => &mut self.i,
            Trait::S => &mut self.s,
            Trait::N => &mut self.n,
            Trait::T => &mut self.t,
            Trait::F => &mut self.f,
            Trait::J => &mut self.j,
            Trait::P => &mut self.p,
        }
    }

    pub fn increment(&mut self, letter: Trait) {
        *self.slot(letter) += 1;
    }

    /// Sum of both poles of `dimension`.
    pub fn dimension_total(&self, dimension: Dimension) -> u32 {
        let (first, second) = dimension.poles();
        self.get(first) + self.get(second)
    }

    pub fn total(&self) -> u32 {
        Trait::ALL.iter().map(|t| self.get(*t)).sum()
    }

    /// The E, S, T and J counts; the stored result keeps only these.
    pub fn dominant_counts(&self) -> DominantCounts {
        DominantCounts {
            extraversion: self.e,
            sensing: self.s,
            thinking: self.t,
            judging: self.j,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantCounts {
    pub extraversion: u32,
    pub sensing: u32,
    pub thinking: u32,
    pub judging: u32,
}

/// Scorer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scored {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub scores: ScoreTally,
}

/// Count the contributed letter for every recorded answer.
///
/// Fails with `IncompleteAssessment` unless all 48 questions are answered.
pub fn tally(answers: &AnswerSet) -> Result<ScoreTally> {
    if answers.len() < QUESTION_COUNT {
        return Err(AssessmentError::IncompleteAssessment {
            answered: answers.len(),
            required: QUESTION_COUNT,
        });
    }

    let mut scores = ScoreTally::default();
    for (index, question) in QUESTIONS.iter().enumerate() {
        let choice = answers
            .get(index)
            .ok_or(AssessmentError::IncompleteAssessment {
                answered: answers.len(),
                required: QUESTION_COUNT,
            })?;
        scores.increment(question.trait_for(choice));
    }
    Ok(scores)
}

/// Per dimension, the first letter wins only on a strict majority; a tie
/// yields the second letter (I, N, F, P).
pub fn derive_type(scores: &ScoreTally) -> PersonalityType {
    PersonalityType::from_poles(
        scores.e > scores.i,
        scores.s > scores.n,
        scores.t > scores.f,
        scores.j > scores.p,
    )
}

pub fn score(answers: &AnswerSet) -> Result<Scored> {
    let scores = tally(answers)?;
    Ok(Scored {
        personality_type: derive_type(&scores),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::Choice;

    /// Answer every question so that `first_counts[d]` items of dimension `d`
    /// contribute its first letter.
    fn engineered(first_counts: [usize; 4]) -> AnswerSet {
        let mut answers = AnswerSet::default();
        let mut seen = [0usize; 4];
        for (index, q) in QUESTIONS.iter().enumerate() {
            let d = Dimension::ALL.iter().position(|d| *d == q.dimension).unwrap();
            let (first, _) = q.dimension.poles();
            let want_first = seen[d] < first_counts[d];
            seen[d] += 1;
            let choice = if (q.a_value == first) == want_first {
                Choice::A
            } else {
                Choice::B
            };
            answers.record(index, choice).unwrap();
        }
        answers
    }

    #[test]
    fn all_a_is_estj() {
        let answers = engineered([12, 12, 12, 12]);
        let scored = score(&answers).unwrap();
        assert_eq!(scored.personality_type, PersonalityType::ESTJ);
        assert_eq!(scored.scores.e, 12);
        assert_eq!(scored.scores.i, 0);
    }

    #[test]
    fn ties_resolve_to_second_letter() {
        // E=6 I=6, S=7 N=5, T=6 F=6, J=8 P=4
        let answers = engineered([6, 7, 6, 8]);
        let scored = score(&answers).unwrap();
        assert_eq!(scored.scores.e, 6);
        assert_eq!(scored.scores.s, 7);
        assert_eq!(scored.scores.n, 5);
        assert_eq!(scored.scores.j, 8);
        assert_eq!(scored.scores.p, 4);
        assert_eq!(scored.personality_type, PersonalityType::ISFJ);
    }

    #[test]
    fn all_ties_is_infp() {
        let scored = score(&engineered([6, 6, 6, 6])).unwrap();
        assert_eq!(scored.personality_type, PersonalityType::INFP);
    }

    #[test]
    fn dimension_pairs_sum_to_twelve() {
        let scored = score(&engineered([3, 9, 11, 0])).unwrap();
        for d in Dimension::ALL {
            assert_eq!(scored.scores.dimension_total(d), 12);
        }
        assert_eq!(scored.scores.total(), QUESTION_COUNT as u32);
    }

    #[test]
    fn scoring_is_deterministic() {
        let answers = engineered([5, 8, 2, 10]);
        assert_eq!(score(&answers).unwrap(), score(&answers).unwrap());
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let mut answers = AnswerSet::default();
        for index in 0..QUESTION_COUNT - 1 {
            answers.record(index, Choice::A).unwrap();
        }
        let err = score(&answers).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::IncompleteAssessment {
                answered: 47,
                required: 48
            }
        );
        assert!(matches!(
            tally(&AnswerSet::default()),
            Err(AssessmentError::IncompleteAssessment { answered: 0, .. })
        ));
    }

    #[test]
    fn tally_serializes_with_letter_keys() {
        let scored = score(&engineered([12, 0, 12, 0])).unwrap();
        let json = serde_json::to_value(scored).unwrap();
        assert_eq!(json["type"], "ENTP");
        assert_eq!(json["scores"]["E"], 12);
        assert_eq!(json["scores"]["N"], 12);
    }

    #[test]
    fn dominant_counts_keep_first_poles() {
        let scored = score(&engineered([4, 5, 6, 7])).unwrap();
        let d = scored.scores.dominant_counts();
        assert_eq!(
            (d.extraversion, d.sensing, d.thinking, d.judging),
            (4, 5, 6, 7)
        );
    }
}
