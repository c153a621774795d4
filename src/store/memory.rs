//! In-process store backing tests and the `--offline` CLI mode.

use super::traits::{
    AccessStore, Career, ProfileStore, RecommendationSource, ResultRecord, ResultStore,
    SkillCourse, StoreError,
};
use crate::assessment::{PersonalityType, ScoreTally};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    results: RwLock<Vec<ResultRecord>>,
    careers: RwLock<HashMap<PersonalityType, Vec<Career>>>,
    courses: RwLock<HashMap<PersonalityType, Vec<SkillCourse>>>,
    completed_profiles: RwLock<HashSet<String>>,
    confirmed_orders: RwLock<HashSet<(String, String)>>,
    enrollments: RwLock<HashSet<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_career(&self, mbti_type: PersonalityType, career: Career) {
        self.careers
            .write()
            .await
            .entry(mbti_type)
            .or_default()
            .push(career);
    }

    pub async fn add_course(&self, mbti_type: PersonalityType, course: SkillCourse) {
        self.courses
            .write()
            .await
            .entry(mbti_type)
            .or_default()
            .push(course);
    }

    pub async fn add_confirmed_order(&self, user_id: &str, course_id: &str) {
        self.confirmed_orders
            .write()
            .await
            .insert((user_id.to_string(), course_id.to_string()));
    }

    pub async fn add_enrollment(&self, user_id: &str, course_id: &str) {
        self.enrollments
            .write()
            .await
            .insert((user_id.to_string(), course_id.to_string()));
    }

    /// Every stored record for `user_id`, oldest first.
    pub async fn results_for(&self, user_id: &str) -> Vec<ResultRecord> {
        self.results
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn result_count(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn quiz_completed(&self, user_id: &str) -> bool {
        self.completed_profiles.read().await.contains(user_id)
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn save_new_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.results
            .write()
            .await
            .push(ResultRecord::new(user_id, mbti_type, scores, completed_at));
        Ok(())
    }

    async fn update_existing_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut results = self.results.write().await;
        let mut updated = 0usize;
        for record in results.iter_mut().filter(|r| r.user_id == user_id) {
            let mut fresh = ResultRecord::new(user_id, mbti_type, scores, completed_at);
            fresh.updated_at = Some(completed_at);
            *record = fresh;
            updated += 1;
        }
        if updated == 0 {
            return Err(StoreError::NotFound {
                user_id: user_id.to_string(),
            });
        }
        Ok(())
    }

    async fn latest_result(&self, user_id: &str) -> Result<Option<ResultRecord>, StoreError> {
        Ok(self
            .results
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.completed_at)
            .cloned())
    }
}

#[async_trait]
impl RecommendationSource for MemoryStore {
    async fn fetch_careers(&self, mbti_type: PersonalityType) -> Result<Vec<Career>, StoreError> {
        Ok(self
            .careers
            .read()
            .await
            .get(&mbti_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_skill_courses(
        &self,
        mbti_type: PersonalityType,
    ) -> Result<Vec<SkillCourse>, StoreError> {
        Ok(self
            .courses
            .read()
            .await
            .get(&mbti_type)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn mark_quiz_completed(&self, user_id: &str) -> Result<(), StoreError> {
        self.completed_profiles
            .write()
            .await
            .insert(user_id.to_string());
        Ok(())
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn has_confirmed_order(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<bool, StoreError> {
        Ok(self
            .confirmed_orders
            .read()
            .await
            .contains(&(user_id.to_string(), course_id.to_string())))
    }

    async fn has_enrollment(&self, user_id: &str, course_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .enrollments
            .read()
            .await
            .contains(&(user_id.to_string(), course_id.to_string())))
    }
}
