#![cfg(feature = "db_integration")]

use chrono::Utc;
use mbti_engine::assessment::{PersonalityType, ScoreTally};
use mbti_engine::config::Config;
use mbti_engine::store::{AccessStore, RecommendationSource, ResultStore, SurrealStore, StoreError};

async fn connect(test: &str) -> Option<SurrealStore> {
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Skipping {test}: failed to load config ({e})");
            return None;
        }
    };
    let store = match SurrealStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Skipping {test}: failed to connect ({e})");
            return None;
        }
    };
    if let Err(e) = store.initialize_schema().await {
        eprintln!("Skipping {test}: schema init failed ({e})");
        return None;
    }
    Some(store)
}

fn tally(e: u32, s: u32, t: u32, j: u32) -> ScoreTally {
    ScoreTally {
        e,
        i: 12 - e,
        s,
        n: 12 - s,
        t,
        f: 12 - t,
        j,
        p: 12 - j,
    }
}

#[tokio::test]
async fn save_update_and_read_back() {
    let Some(store) = connect("save_update_and_read_back").await else {
        return;
    };
    let user = format!("it-{}", uuid::Uuid::new_v4());

    assert!(store.latest_result(&user).await.unwrap().is_none());
    assert!(matches!(
        store
            .update_existing_result(&user, PersonalityType::INTJ, &tally(3, 4, 9, 10), Utc::now())
            .await,
        Err(StoreError::NotFound { .. })
    ));

    store
        .save_new_result(&user, PersonalityType::INTJ, &tally(3, 4, 9, 10), Utc::now())
        .await
        .expect("save");
    let saved = store.latest_result(&user).await.unwrap().expect("saved row");
    assert_eq!(saved.mbti_type, PersonalityType::INTJ);
    assert_eq!(saved.thinking_score, 9);
    assert!(saved.updated_at.is_none());

    store
        .update_existing_result(&user, PersonalityType::ESFP, &tally(10, 8, 2, 1), Utc::now())
        .await
        .expect("update");
    let updated = store.latest_result(&user).await.unwrap().expect("updated row");
    assert_eq!(updated.mbti_type, PersonalityType::ESFP);
    assert_eq!(updated.extraversion_score, 10);
    assert!(updated.updated_at.is_some());
    assert!(updated.completed_at >= saved.completed_at);

    store
        .handle()
        .query("DELETE mbti_results WHERE user_id = $user_id")
        .bind(("user_id", user))
        .await
        .unwrap();
}

#[tokio::test]
async fn recommendation_rows_decode() {
    let Some(store) = connect("recommendation_rows_decode").await else {
        return;
    };
    store.fetch_careers(PersonalityType::ISTP).await.expect("careers decode");
    store
        .fetch_skill_courses(PersonalityType::ISTP)
        .await
        .expect("courses decode");
}

#[tokio::test]
async fn confirmed_order_and_enrollment_grant_access() {
    let Some(store) = connect("confirmed_order_and_enrollment_grant_access").await else {
        return;
    };
    let buyer = format!("it-{}", uuid::Uuid::new_v4());
    let student = format!("it-{}", uuid::Uuid::new_v4());
    let course = format!("course-{}", uuid::Uuid::new_v4());

    store
        .handle()
        .query(
            "CREATE order_items SET course_id = $course_id, \
             order_id = (CREATE ONLY orders SET user_id = $user_id, status = 'confirmed').id",
        )
        .bind(("user_id", buyer.clone()))
        .bind(("course_id", course.clone()))
        .await
        .unwrap()
        .check()
        .unwrap();
    store
        .handle()
        .query("CREATE enrollments SET student_id = $user_id, course_id = $course_id, status = 'enrolled'")
        .bind(("user_id", student.clone()))
        .bind(("course_id", course.clone()))
        .await
        .unwrap()
        .check()
        .unwrap();

    assert!(store.has_confirmed_order(&buyer, &course).await.unwrap());
    assert!(!store.has_enrollment(&buyer, &course).await.unwrap());
    assert!(store.has_enrollment(&student, &course).await.unwrap());
    assert!(!store.has_confirmed_order(&student, &course).await.unwrap());
}
