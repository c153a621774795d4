use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mbti_engine::assessment::{PersonalityType, ScoreTally};
use mbti_engine::config::DEFAULT_ASSESSMENT_COURSE_ID;
use mbti_engine::store::{AccessStore, MemoryStore, ResultRecord, ResultStore, StoreError};
use mbti_engine::{AccessGate, AccessStatus};
use std::sync::Arc;

/// Grants access but cannot read results.
struct UnreadableResults;

#[async_trait]
impl ResultStore for UnreadableResults {
    async fn save_new_result(
        &self,
        _: &str,
        _: PersonalityType,
        _: &ScoreTally,
        _: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn update_existing_result(
        &self,
        _: &str,
        _: PersonalityType,
        _: &ScoreTally,
        _: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn latest_result(&self, _: &str) -> Result<Option<ResultRecord>, StoreError> {
        Err(StoreError::Backend("read timeout".into()))
    }
}

struct FlakyAccess {
    enrolled: bool,
}

#[async_trait]
impl AccessStore for FlakyAccess {
    async fn has_confirmed_order(&self, _: &str, _: &str) -> Result<bool, StoreError> {
        Err(StoreError::Backend("orders unavailable".into()))
    }

    async fn has_enrollment(&self, _: &str, _: &str) -> Result<bool, StoreError> {
        Ok(self.enrolled)
    }
}

#[tokio::test]
async fn failed_order_read_falls_back_to_enrollment() {
    let gate = AccessGate::new(
        Arc::new(FlakyAccess { enrolled: true }),
        Arc::new(MemoryStore::new()),
        DEFAULT_ASSESSMENT_COURSE_ID,
    );
    assert!(gate.check(Some("u1")).await.has_access());

    let gate = AccessGate::new(
        Arc::new(FlakyAccess { enrolled: false }),
        Arc::new(MemoryStore::new()),
        DEFAULT_ASSESSMENT_COURSE_ID,
    );
    assert_eq!(
        gate.check(Some("u1")).await,
        AccessStatus::PurchaseRequired
    );
}

#[tokio::test]
async fn unreadable_previous_result_still_grants() {
    let gate = AccessGate::new(
        Arc::new(FlakyAccess { enrolled: true }),
        Arc::new(UnreadableResults),
        DEFAULT_ASSESSMENT_COURSE_ID,
    );
    let status = gate.check(Some("u1")).await;
    assert_eq!(status, AccessStatus::Granted { previous: None });
    assert!(status.should_auto_start());
}

#[tokio::test]
async fn stored_result_is_returned_with_access() {
    let store = Arc::new(MemoryStore::new());
    store
        .add_confirmed_order("u1", DEFAULT_ASSESSMENT_COURSE_ID)
        .await;
    store
        .save_new_result("u1", PersonalityType::ENTP, &ScoreTally::default(), Utc::now())
        .await
        .unwrap();
    let gate = AccessGate::new(store.clone(), store, DEFAULT_ASSESSMENT_COURSE_ID);

    let status = gate.check(Some("u1")).await;
    assert_eq!(
        status.previous_result().map(|r| r.mbti_type),
        Some(PersonalityType::ENTP)
    );
    assert!(!status.should_auto_start());
}
