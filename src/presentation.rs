//! Read models for rendering a finished or stored assessment.

use crate::assessment::{
    Dimension, PersonalityType, ScoreTally, Trait, TypeProfile, profile_for,
    questions::QUESTIONS_PER_DIMENSION,
};
use crate::engine::Completion;
use crate::notify::{Notice, Severity};
use crate::store::{Career, ResultRecord, SkillCourse};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One dimension's split, e.g. E 8 / I 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub first: Trait,
    pub second: Trait,
    pub first_count: u32,
    pub second_count: u32,
    /// Share of the dimension's answers that went to `first`, rounded.
    pub first_percent: u32,
}

impl DimensionScore {
    pub fn from_counts(dimension: Dimension, first_count: u32, second_count: u32) -> Self {
        let (first, second) = dimension.poles();
        let total = first_count + second_count;
        let first_percent = if total == 0 {
            0
        } else {
            (first_count * 100 + total / 2) / total
        };
        Self {
            dimension,
            first,
            second,
            first_count,
            second_count,
            first_percent,
        }
    }

    pub fn from_tally(dimension: Dimension, scores: &ScoreTally) -> Self {
        let (first, second) = dimension.poles();
        Self::from_counts(dimension, scores.get(first), scores.get(second))
    }

    /// The pole this dimension resolved to; ties go to `second`.
    pub fn winner(&self) -> Trait {
        if self.first_count > self.second_count {
            self.first
        } else {
            self.second
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub profile: TypeProfile,
    pub dimensions: [DimensionScore; 4],
    pub careers: Vec<Career>,
    pub courses: Vec<SkillCourse>,
    pub headline: Notice,
}

impl ResultView {
    pub fn from_completion(completion: &Completion) -> Self {
        let personality_type = completion.personality_type;
        Self {
            personality_type,
            profile: profile_for(personality_type),
            dimensions: Dimension::ALL.map(|d| DimensionScore::from_tally(d, &completion.scores)),
            careers: completion.careers.clone(),
            courses: completion.courses.clone(),
            headline: completion_notice(personality_type, completion.retake),
        }
    }
}

/// Success notice shown once a session completes.
pub fn completion_notice(personality_type: PersonalityType, retake: bool) -> Notice {
    if retake {
        Notice::new(
            "Test Updated!",
            format!(
                "Your personality type has been updated to {personality_type}. \
                 Your personalized recommendations are displayed below."
            ),
            Severity::Info,
        )
    } else {
        Notice::new(
            "Test Completed!",
            format!(
                "Your personality type is {personality_type}. \
                 Check out your personalized recommendations below."
            ),
            Severity::Info,
        )
    }
}

/// A stored result as shown before offering a retake.
#[derive(Debug, Clone, Serialize)]
pub struct PreviousResultSummary {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub title: &'static str,
    pub dimensions: [DimensionScore; 4],
    pub completed_at: DateTime<Utc>,
}

impl PreviousResultSummary {
    pub fn from_record(record: &ResultRecord) -> Self {
        let per = QUESTIONS_PER_DIMENSION as u32;
        let split = |dimension, n: u32| {
            let n = n.min(per);
            DimensionScore::from_counts(dimension, n, per - n)
        };
        Self {
            personality_type: record.mbti_type,
            title: profile_for(record.mbti_type).title,
            dimensions: [
                split(Dimension::EI, record.extraversion_score),
                split(Dimension::SN, record.sensing_score),
                split(Dimension::TF, record.thinking_score),
                split(Dimension::JP, record.judging_score),
            ],
            completed_at: record.completed_at,
        }
    }

    /// `E: 8/12` style lines, one per dimension.
    pub fn score_lines(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .map(|d| format!("{}: {}/{}", d.first, d.first_count, QUESTIONS_PER_DIMENSION))
            .collect()
    }
}
