use crate::assessment::{PersonalityType, ScoreTally};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user's latest stored result. Only the first-pole counts are kept; the
/// opposing counts are `12 - n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub user_id: String,
    pub mbti_type: PersonalityType,
    pub extraversion_score: u32,
    pub sensing_score: u32,
    pub thinking_score: u32,
    pub judging_score: u32,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResultRecord {
    pub fn new(
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let dominant = scores.dominant_counts();
        Self {
            user_id: user_id.to_string(),
            mbti_type,
            extraversion_score: dominant.extraversion,
            sensing_score: dominant.sensing,
            thinking_score: dominant.thinking,
            judging_score: dominant.judging,
            completed_at,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub title: String,
    pub description: String,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCourse {
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("no stored result for user {user_id}")]
    NotFound { user_id: String },
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Keyed storage for the latest result of each user.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save_new_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Overwrite the user's existing record. `NotFound` when there is none.
    async fn update_existing_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Most recent record by `completed_at`.
    async fn latest_result(&self, user_id: &str) -> Result<Option<ResultRecord>, StoreError>;
}

/// Read-only recommendation tables keyed by type. Empty is a valid answer.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_careers(&self, mbti_type: PersonalityType) -> Result<Vec<Career>, StoreError>;

    async fn fetch_skill_courses(
        &self,
        mbti_type: PersonalityType,
    ) -> Result<Vec<SkillCourse>, StoreError>;
}

/// User profile flags touched after a stored result.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Set `mbti_quiz_completed` and clear `show_mbti_reminder`.
    async fn mark_quiz_completed(&self, user_id: &str) -> Result<(), StoreError>;
}

/// Purchase and enrollment reads used by the access gate.
#[async_trait]
pub trait AccessStore: Send + Sync {
    async fn has_confirmed_order(&self, user_id: &str, course_id: &str)
    -> Result<bool, StoreError>;

    async fn has_enrollment(&self, user_id: &str, course_id: &str) -> Result<bool, StoreError>;
}
