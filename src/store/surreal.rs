use super::traits::{
    AccessStore, Career, ProfileStore, RecommendationSource, ResultRecord, ResultStore,
    SkillCourse, StoreError,
};
use crate::assessment::{PersonalityType, ScoreTally};
use crate::config::Config;
use crate::error::{AssessmentError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::sql::Datetime;
use tracing::{debug, info, warn};

/// SurrealDB-backed implementation of every store trait.
#[derive(Clone)]
pub struct SurrealStore {
    db: Arc<Surreal<Client>>,
}

/// Normalize URL for the Ws engine (expects host:port, no scheme)
pub(crate) fn normalize_ws_url(s: &str) -> String {
    s.strip_prefix("ws://")
        .or_else(|| s.strip_prefix("wss://"))
        .or_else(|| s.strip_prefix("http://"))
        .or_else(|| s.strip_prefix("https://"))
        .unwrap_or(s)
        .to_string()
}

impl SurrealStore {
    /// Connect, sign in and select namespace/database.
    pub async fn connect(config: &Config) -> Result<Self> {
        info!("Connecting to SurrealDB service via WebSocket");

        let url = normalize_ws_url(&config.system.database_url);
        let user = &config.runtime.database_user;
        let pass = &config.runtime.database_pass;
        let ns = &config.system.database_ns;
        let dbname = &config.system.database_db;

        let max_retries = if config.runtime.db_reconnect { 5 } else { 0 };

        let mut attempt = 0u32;
        let db = loop {
            match Surreal::new::<Ws>(url.clone()).await {
                Ok(conn) => {
                    if attempt > 0 {
                        info!(
                            "Successfully reconnected to SurrealDB after {} attempts",
                            attempt + 1
                        );
                    }
                    break conn;
                }
                Err(e) if attempt < max_retries => {
                    let delay_ms = (1000 * (1u64 << attempt.min(5))).min(60000);
                    warn!(
                        "SurrealDB connection attempt {} failed: {}. Retrying in {}ms...",
                        attempt + 1,
                        e,
                        delay_ms
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(AssessmentError::Database {
                        message: format!(
                            "Failed to connect to SurrealDB at {} after {} attempts: {}",
                            config.system.database_url,
                            attempt + 1,
                            e
                        ),
                    });
                }
            }
        };

        db.signin(surrealdb::opt::auth::Root {
            username: user.as_str(),
            password: pass.as_str(),
        })
        .await
        .map_err(|e| AssessmentError::Database {
            message: format!("Failed to authenticate with SurrealDB as user '{}': {}", user, e),
        })?;

        db.use_ns(ns).use_db(dbname).await.map_err(|e| {
            AssessmentError::Database {
                message: format!("Failed to select {}/{}: {}", ns, dbname, e),
            }
        })?;

        Ok(Self { db: Arc::new(db) })
    }

    pub fn handle(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    user_id: String,
    mbti_type: String,
    extraversion_score: i64,
    sensing_score: i64,
    thinking_score: i64,
    judging_score: i64,
    completed_at: Datetime,
    #[serde(default)]
    updated_at: Option<Datetime>,
}

fn score_from_row(name: &str, value: i64) -> std::result::Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::Decode(format!("{name} out of range: {value}")))
}

impl TryFrom<ResultRow> for ResultRecord {
    type Error = StoreError;

    fn try_from(row: ResultRow) -> std::result::Result<Self, Self::Error> {
        let mbti_type = row
            .mbti_type
            .parse::<PersonalityType>()
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(ResultRecord {
            user_id: row.user_id,
            mbti_type,
            extraversion_score: score_from_row("extraversion_score", row.extraversion_score)?,
            sensing_score: score_from_row("sensing_score", row.sensing_score)?,
            thinking_score: score_from_row("thinking_score", row.thinking_score)?,
            judging_score: score_from_row("judging_score", row.judging_score)?,
            completed_at: row.completed_at.0,
            updated_at: row.updated_at.map(|d| d.0),
        })
    }
}

#[async_trait]
impl ResultStore for SurrealStore {
    async fn save_new_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> std::result::Result<(), StoreError> {
        let counts = scores.dominant_counts();
        let sql = "CREATE mbti_results SET user_id = $user_id, mbti_type = $mbti_type, \
                   extraversion_score = $e, sensing_score = $s, thinking_score = $t, \
                   judging_score = $j, completed_at = $completed_at";
        self.db
            .query(sql)
            .bind(("user_id", user_id.to_string()))
            .bind(("mbti_type", mbti_type.code().to_string()))
            .bind(("e", counts.extraversion))
            .bind(("s", counts.sensing))
            .bind(("t", counts.thinking))
            .bind(("j", counts.judging))
            .bind(("completed_at", Datetime::from(completed_at)))
            .await?
            .check()?;
        debug!(user_id, %mbti_type, "stored new assessment result");
        Ok(())
    }

    async fn update_existing_result(
        &self,
        user_id: &str,
        mbti_type: PersonalityType,
        scores: &ScoreTally,
        completed_at: DateTime<Utc>,
    ) -> std::result::Result<(), StoreError> {
        let counts = scores.dominant_counts();
        let sql = "UPDATE mbti_results SET mbti_type = $mbti_type, \
                   extraversion_score = $e, sensing_score = $s, thinking_score = $t, \
                   judging_score = $j, completed_at = $completed_at, updated_at = time::now() \
                   WHERE user_id = $user_id RETURN VALUE user_id";
        let updated: Vec<String> = self
            .db
            .query(sql)
            .bind(("user_id", user_id.to_string()))
            .bind(("mbti_type", mbti_type.code().to_string()))
            .bind(("e", counts.extraversion))
            .bind(("s", counts.sensing))
            .bind(("t", counts.thinking))
            .bind(("j", counts.judging))
            .bind(("completed_at", Datetime::from(completed_at)))
            .await?
            .take(0)?;

        if updated.is_empty() {
            return Err(StoreError::NotFound {
                user_id: user_id.to_string(),
            });
        }
        debug!(user_id, %mbti_type, rows = updated.len(), "updated assessment result");
        Ok(())
    }

    async fn latest_result(
        &self,
        user_id: &str,
    ) -> std::result::Result<Option<ResultRecord>, StoreError> {
        let sql = r#"
            SELECT user_id, mbti_type, extraversion_score, sensing_score,
                   thinking_score, judging_score, completed_at, updated_at
            FROM mbti_results
            WHERE user_id = $user_id
            ORDER BY completed_at DESC
            LIMIT 1
        "#;
        let rows: Vec<ResultRow> = self
            .db
            .query(sql)
            .bind(("user_id", user_id.to_string()))
            .await?
            .take(0)?;
        rows.into_iter().next().map(ResultRecord::try_from).transpose()
    }
}

#[async_trait]
impl RecommendationSource for SurrealStore {
    async fn fetch_careers(
        &self,
        mbti_type: PersonalityType,
    ) -> std::result::Result<Vec<Career>, StoreError> {
        let sql = "SELECT career_title AS title, description, industry \
                   FROM career_recommendations WHERE mbti_type = $mbti_type";
        let careers: Vec<Career> = self
            .db
            .query(sql)
            .bind(("mbti_type", mbti_type.code().to_string()))
            .await?
            .take(0)?;
        Ok(careers)
    }

    async fn fetch_skill_courses(
        &self,
        mbti_type: PersonalityType,
    ) -> std::result::Result<Vec<SkillCourse>, StoreError> {
        let sql = "SELECT skill_title AS title, description, category \
                   FROM course_recommendations WHERE mbti_type = $mbti_type";
        let courses: Vec<SkillCourse> = self
            .db
            .query(sql)
            .bind(("mbti_type", mbti_type.code().to_string()))
            .await?
            .take(0)?;
        Ok(courses)
    }
}

#[async_trait]
impl ProfileStore for SurrealStore {
    async fn mark_quiz_completed(&self, user_id: &str) -> std::result::Result<(), StoreError> {
        self.db
            .query(
                "UPDATE profiles SET mbti_quiz_completed = true, show_mbti_reminder = false \
                 WHERE user_id = $user_id",
            )
            .bind(("user_id", user_id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}

#[async_trait]
impl AccessStore for SurrealStore {
    async fn has_confirmed_order(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> std::result::Result<bool, StoreError> {
        let sql = "SELECT VALUE course_id FROM order_items \
                   WHERE course_id = $course_id AND order_id.user_id = $user_id \
                   AND order_id.status = 'confirmed' LIMIT 1";
        let rows: Vec<String> = self
            .db
            .query(sql)
            .bind(("user_id", user_id.to_string()))
            .bind(("course_id", course_id.to_string()))
            .await?
            .take(0)?;
        Ok(!rows.is_empty())
    }

    async fn has_enrollment(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> std::result::Result<bool, StoreError> {
        let sql = "SELECT VALUE status FROM enrollments \
                   WHERE student_id = $user_id AND course_id = $course_id \
                   AND status = 'enrolled' LIMIT 1";
        let rows: Vec<String> = self
            .db
            .query(sql)
            .bind(("user_id", user_id.to_string()))
            .bind(("course_id", course_id.to_string()))
            .await?
            .take(0)?;
        Ok(!rows.is_empty())
    }
}
