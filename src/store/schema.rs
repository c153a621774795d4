use super::surreal::SurrealStore;
use crate::error::Result;
use tracing::info;

/// Tables the assessment reads or writes. Orders, enrollments and profiles
/// are owned by the storefront; only the fields used here are declared.
const SCHEMA_SQL: &str = r#"
    DEFINE TABLE IF NOT EXISTS mbti_results SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS user_id ON TABLE mbti_results TYPE string;
    DEFINE FIELD IF NOT EXISTS mbti_type ON TABLE mbti_results TYPE string
        ASSERT $value IN ['INTJ','INTP','ENTJ','ENTP','INFJ','INFP','ENFJ','ENFP',
                          'ISTJ','ISFJ','ESTJ','ESFJ','ISTP','ISFP','ESTP','ESFP'];
    DEFINE FIELD IF NOT EXISTS extraversion_score ON TABLE mbti_results TYPE int ASSERT $value >= 0 AND $value <= 12;
    DEFINE FIELD IF NOT EXISTS sensing_score ON TABLE mbti_results TYPE int ASSERT $value >= 0 AND $value <= 12;
    DEFINE FIELD IF NOT EXISTS thinking_score ON TABLE mbti_results TYPE int ASSERT $value >= 0 AND $value <= 12;
    DEFINE FIELD IF NOT EXISTS judging_score ON TABLE mbti_results TYPE int ASSERT $value >= 0 AND $value <= 12;
    DEFINE FIELD IF NOT EXISTS completed_at ON TABLE mbti_results TYPE datetime;
    DEFINE FIELD IF NOT EXISTS updated_at ON TABLE mbti_results TYPE option<datetime>;
    DEFINE INDEX IF NOT EXISTS idx_mbti_results_user ON TABLE mbti_results FIELDS user_id, completed_at;

    DEFINE TABLE IF NOT EXISTS career_recommendations SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS idx_career_type ON TABLE career_recommendations FIELDS mbti_type;

    DEFINE TABLE IF NOT EXISTS course_recommendations SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS idx_course_type ON TABLE course_recommendations FIELDS mbti_type;

    DEFINE TABLE IF NOT EXISTS profiles SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS mbti_quiz_completed ON TABLE profiles TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS show_mbti_reminder ON TABLE profiles TYPE bool DEFAULT true;
    DEFINE INDEX IF NOT EXISTS idx_profiles_user ON TABLE profiles FIELDS user_id UNIQUE;

    DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS idx_orders_user_status ON TABLE orders FIELDS user_id, status;

    DEFINE TABLE IF NOT EXISTS order_items SCHEMALESS;
    DEFINE FIELD IF NOT EXISTS order_id ON TABLE order_items TYPE record<orders>;
    DEFINE INDEX IF NOT EXISTS idx_order_items_course ON TABLE order_items FIELDS course_id;

    DEFINE TABLE IF NOT EXISTS enrollments SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS idx_enrollments_student_course ON TABLE enrollments FIELDS student_id, course_id;
"#;

impl SurrealStore {
    /// Initialize the database schema
    pub async fn initialize_schema(&self) -> Result<()> {
        info!("Initializing assessment schema");
        self.handle().query(SCHEMA_SQL).await?.check()?;
        Ok(())
    }
}
