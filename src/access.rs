//! Entry gate for the assessment page.
//!
//! A signed-in user may take the assessment when they hold a confirmed
//! purchase of the assessment course or an active enrollment in it.

use crate::store::{AccessStore, ResultRecord, ResultStore};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AccessStatus {
    LoginRequired,
    PurchaseRequired,
    Granted { previous: Option<ResultRecord> },
}

impl AccessStatus {
    pub fn has_access(&self) -> bool {
        matches!(self, AccessStatus::Granted { .. })
    }

    pub fn previous_result(&self) -> Option<&ResultRecord> {
        match self {
            AccessStatus::Granted { previous } => previous.as_ref(),
            _ => None,
        }
    }

    /// Start the quiz straight away: access and nothing on record yet.
    pub fn should_auto_start(&self) -> bool {
        matches!(self, AccessStatus::Granted { previous: None })
    }
}

pub struct AccessGate {
    access: Arc<dyn AccessStore>,
    results: Arc<dyn ResultStore>,
    course_id: String,
}

impl AccessGate {
    pub fn new(
        access: Arc<dyn AccessStore>,
        results: Arc<dyn ResultStore>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            access,
            results,
            course_id: course_id.into(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Read failures count as "no access" / "no previous result".
    pub async fn check(&self, identity: Option<&str>) -> AccessStatus {
        let Some(user_id) = identity.filter(|id| !id.trim().is_empty()) else {
            return AccessStatus::LoginRequired;
        };

        let (ordered, enrolled) = tokio::join!(
            self.access.has_confirmed_order(user_id, &self.course_id),
            self.access.has_enrollment(user_id, &self.course_id),
        );
        let ordered = ordered.unwrap_or_else(|e| {
            warn!(user_id, error = %e, "order lookup failed");
            false
        });
        let enrolled = enrolled.unwrap_or_else(|e| {
            warn!(user_id, error = %e, "enrollment lookup failed");
            false
        });
        debug!(user_id, ordered, enrolled, course_id = %self.course_id, "access checked");

        if !(ordered || enrolled) {
            return AccessStatus::PurchaseRequired;
        }

        let previous = match self.results.latest_result(user_id).await {
            Ok(previous) => previous,
            Err(e) => {
                warn!(user_id, error = %e, "previous result lookup failed");
                None
            }
        };
        AccessStatus::Granted { previous }
    }
}
