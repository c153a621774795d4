//! Completion routine: score a finished session, persist it and resolve
//! recommendations.
//!
//! Persistence and the two recommendation reads run concurrently. Every
//! external failure is downgraded to a warning; only scoring itself can fail
//! the call.

use crate::assessment::scorer::{self, ScoreTally, Scored};
use crate::assessment::{Choice, PersonalityType, SessionState};
use crate::config::Config;
use crate::error::{AssessmentError, Result};
use crate::notify::{Notice, Notifier, Severity, TracingNotifier};
use crate::store::{
    Career, ProfileStore, RecommendationSource, ResultStore, SkillCourse, StoreError,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub type CompletionCallback = Arc<dyn Fn(&Scored) + Send + Sync>;

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(15_000);

/// What happened to the result record on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistOutcome {
    Saved,
    Updated,
    /// No identity; nothing written.
    Skipped,
    Failed,
}

/// Terminal session payload.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub scores: ScoreTally,
    pub careers: Vec<Career>,
    pub courses: Vec<SkillCourse>,
    pub retake: bool,
    pub completed_at: DateTime<Utc>,
    pub persistence: PersistOutcome,
    #[serde(skip)]
    pub warnings: Vec<AssessmentError>,
}

impl Completion {
    pub fn scored(&self) -> Scored {
        Scored {
            personality_type: self.personality_type,
            scores: self.scores,
        }
    }
}

pub struct AssessmentEngine {
    results: Arc<dyn ResultStore>,
    recommendations: Arc<dyn RecommendationSource>,
    profiles: Option<Arc<dyn ProfileStore>>,
    notifier: Arc<dyn Notifier>,
    call_timeout: Duration,
    on_complete: Option<CompletionCallback>,
}

impl AssessmentEngine {
    pub fn new(
        results: Arc<dyn ResultStore>,
        recommendations: Arc<dyn RecommendationSource>,
    ) -> Self {
        Self {
            results,
            recommendations,
            profiles: None,
            notifier: Arc::new(TracingNotifier),
            call_timeout: DEFAULT_CALL_TIMEOUT,
            on_complete: None,
        }
    }

    /// Engine over a single backend that serves every collaborator role.
    pub fn from_store<S>(config: &Config, store: Arc<S>) -> Self
    where
        S: ResultStore + RecommendationSource + ProfileStore + 'static,
    {
        Self::new(store.clone(), store.clone())
            .with_profiles(store)
            .with_call_timeout(config.call_timeout())
    }

    pub fn with_profiles(mut self, profiles: Arc<dyn ProfileStore>) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Invoked once per finished session with the type and tally.
    pub fn on_complete(mut self, callback: impl Fn(&Scored) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(callback));
        self
    }

    /// Answer the current question; completes the session when it was the last one.
    pub async fn submit(
        &self,
        state: &SessionState,
        choice: Choice,
        identity: Option<&str>,
    ) -> Result<SessionState> {
        let next = state.answer(choice)?;
        if next.is_scoring() {
            self.complete(&next, identity).await
        } else {
            Ok(next)
        }
    }

    /// Score `state` and move it to `Complete`.
    ///
    /// Fails with `IncompleteAssessment` (before any write) when fewer than
    /// 48 answers are recorded.
    pub async fn complete(
        &self,
        state: &SessionState,
        identity: Option<&str>,
    ) -> Result<SessionState> {
        let (answers, retake) = match state {
            SessionState::InProgress {
                answers, retake, ..
            }
            | SessionState::Scoring { answers, retake } => (answers, *retake),
            SessionState::Complete(_) => {
                return Err(AssessmentError::InvalidTransition {
                    action: "complete".into(),
                    state: "complete".into(),
                });
            }
        };

        let scored = scorer::score(answers)?;
        let mbti_type = scored.personality_type;
        let completed_at = Utc::now();
        let identity = identity.filter(|id| !id.trim().is_empty());
        info!(%mbti_type, retake, authenticated = identity.is_some(), "assessment scored");

        let (persisted, careers, courses) = tokio::join!(
            self.persist(identity, &scored, retake, completed_at),
            self.resolve_careers(mbti_type),
            self.resolve_courses(mbti_type),
        );

        let (persistence, mut warnings) = persisted;
        let careers = careers.unwrap_or_else(|w| {
            warnings.push(w);
            Vec::new()
        });
        let courses = courses.unwrap_or_else(|w| {
            warnings.push(w);
            Vec::new()
        });

        for warning in &warnings {
            self.notifier.notify(&warning_notice(warning, retake));
        }

        if let Some(callback) = &self.on_complete {
            callback(&scored);
        }

        Ok(SessionState::Complete(Box::new(Completion {
            personality_type: mbti_type,
            scores: scored.scores,
            careers,
            courses,
            retake,
            completed_at,
            persistence,
            warnings,
        })))
    }

    async fn bounded<T, F>(&self, operation: &str, fut: F) -> std::result::Result<T, StoreError>
    where
        F: Future<Output = std::result::Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                operation: operation.to_string(),
                timeout_ms: self.call_timeout.as_millis() as u64,
            }),
        }
    }

    /// Save or update the result, then flag the profile. Exactly one of
    /// save/update runs, chosen by `retake`.
    ///
    /// The profile flags are only touched after the result write succeeds; a
    /// failed save or update leaves `profiles` unchanged.
    async fn persist(
        &self,
        identity: Option<&str>,
        scored: &Scored,
        retake: bool,
        completed_at: DateTime<Utc>,
    ) -> (PersistOutcome, Vec<AssessmentError>) {
        let Some(user_id) = identity else {
            debug!(reason = %AssessmentError::IdentityMissing, "skipping persistence");
            return (PersistOutcome::Skipped, Vec::new());
        };

        let written = if retake {
            self.bounded(
                "update_existing_result",
                self.results.update_existing_result(
                    user_id,
                    scored.personality_type,
                    &scored.scores,
                    completed_at,
                ),
            )
            .await
            .map(|_| PersistOutcome::Updated)
        } else {
            self.bounded(
                "save_new_result",
                self.results.save_new_result(
                    user_id,
                    scored.personality_type,
                    &scored.scores,
                    completed_at,
                ),
            )
            .await
            .map(|_| PersistOutcome::Saved)
        };

        let outcome = match written {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(user_id, retake, error = %e, "failed to persist assessment result");
                return (
                    PersistOutcome::Failed,
                    vec![AssessmentError::PersistenceFailure {
                        message: e.to_string(),
                    }],
                );
            }
        };

        let mut warnings = Vec::new();
        if let Some(profiles) = &self.profiles
            && let Err(e) = self
                .bounded("mark_quiz_completed", profiles.mark_quiz_completed(user_id))
                .await
        {
            warn!(user_id, error = %e, "failed to update profile completion flags");
            warnings.push(AssessmentError::ProfileUpdateFailure {
                message: e.to_string(),
            });
        }

        (outcome, warnings)
    }

    async fn resolve_careers(
        &self,
        mbti_type: PersonalityType,
    ) -> std::result::Result<Vec<Career>, AssessmentError> {
        self.bounded("fetch_careers", self.recommendations.fetch_careers(mbti_type))
            .await
            .inspect(|careers| debug!(%mbti_type, count = careers.len(), "careers fetched"))
            .map_err(|e| {
                warn!(%mbti_type, error = %e, "career lookup failed");
                AssessmentError::RecommendationLookupFailure {
                    kind: "careers".into(),
                    message: e.to_string(),
                }
            })
    }

    async fn resolve_courses(
        &self,
        mbti_type: PersonalityType,
    ) -> std::result::Result<Vec<SkillCourse>, AssessmentError> {
        self.bounded(
            "fetch_skill_courses",
            self.recommendations.fetch_skill_courses(mbti_type),
        )
        .await
        .inspect(|courses| debug!(%mbti_type, count = courses.len(), "courses fetched"))
        .map_err(|e| {
            warn!(%mbti_type, error = %e, "course lookup failed");
            AssessmentError::RecommendationLookupFailure {
                kind: "courses".into(),
                message: e.to_string(),
            }
        })
    }
}

fn warning_notice(warning: &AssessmentError, retake: bool) -> Notice {
    match warning {
        AssessmentError::ProfileUpdateFailure { .. } => Notice::new(
            "Profile Error",
            "Your result was saved but your profile could not be updated.",
            Severity::Warning,
        ),
        AssessmentError::PersistenceFailure { .. } if retake => Notice::new(
            "Update Error",
            "Failed to update your test results. Please try again.",
            Severity::Destructive,
        ),
        AssessmentError::PersistenceFailure { .. } => Notice::new(
            "Save Error",
            "Failed to save your test results. Please try again.",
            Severity::Destructive,
        ),
        AssessmentError::RecommendationLookupFailure { kind, .. } => {
            let what = if kind == "careers" { "career" } else { "course" };
            Notice::new(
                "Warning",
                format!("Could not load {what} recommendations. Please refresh the page."),
                Severity::Destructive,
            )
        }
        other => Notice::new("Error", other.to_string(), Severity::Destructive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_follow_retake_flag() {
        let err = AssessmentError::PersistenceFailure {
            message: "db down".into(),
        };
        assert_eq!(warning_notice(&err, false).title, "Save Error");
        assert_eq!(warning_notice(&err, true).title, "Update Error");
    }

    #[test]
    fn profile_failure_has_its_own_notice() {
        let err = AssessmentError::ProfileUpdateFailure {
            message: "profiles down".into(),
        };
        let notice = warning_notice(&err, true);
        assert_eq!(notice.title, "Profile Error");
        assert_eq!(notice.severity, Severity::Warning);
    }

    #[test]
    fn lookup_notice_names_the_list() {
        let err = AssessmentError::RecommendationLookupFailure {
            kind: "courses".into(),
            message: "timeout".into(),
        };
        let notice = warning_notice(&err, false);
        assert!(notice.description.contains("course recommendations"));
        assert_eq!(notice.severity, Severity::Destructive);
    }
}
