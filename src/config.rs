use crate::store::surreal::normalize_ws_url;
use serde::{Deserialize, Serialize};

/// Course id of the purchasable assessment in the storefront catalog.
pub const DEFAULT_ASSESSMENT_COURSE_ID: &str = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "mbti_engine=info";

const MIN_CALL_TIMEOUT_MS: u64 = 100;
const MAX_CALL_TIMEOUT_MS: u64 = 120_000;

/// Main configuration structure loaded from mbti_engine.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub assessment: AssessmentConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Database location
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub database_url: String,
    pub database_ns: String,
    pub database_db: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            database_url: "127.0.0.1:8000".to_string(),
            database_ns: "storefront".to_string(),
            database_db: "assessments".to_string(),
        }
    }
}

/// Assessment behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Course a user must have bought or enrolled in to take the test
    pub course_id: String,
    /// Upper bound for each persistence/recommendation call
    pub call_timeout_ms: u64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            course_id: DEFAULT_ASSESSMENT_COURSE_ID.to_string(),
            call_timeout_ms: 15_000,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub database_user: String,
    pub database_pass: String,
    pub db_reconnect: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            database_user: "root".to_string(),
            database_pass: "root".to_string(),
            db_reconnect: false,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            database_user: std::env::var("MBTI_DB_USER").unwrap_or_else(|_| "root".to_string()),
            database_pass: std::env::var("MBTI_DB_PASS").unwrap_or_else(|_| "root".to_string()),
            db_reconnect: std::env::var("MBTI_DB_RECONNECT")
                .ok()
                .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses MBTI_ENGINE_CONFIG or defaults to "mbti_engine.toml".
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(env_path) = std::env::var("MBTI_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path = std::env::var("MBTI_ENGINE_CONFIG")
            .unwrap_or_else(|_| "mbti_engine.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            Self::from_toml(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate();

        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db_url) = std::env::var("MBTI_DB_URL") {
            tracing::debug!("MBTI_DB_URL env override applied");
            self.system.database_url = db_url;
        }
        if let Ok(db_ns) = std::env::var("MBTI_DB_NS") {
            tracing::debug!("MBTI_DB_NS env override applied");
            self.system.database_ns = db_ns;
        }
        if let Ok(db_name) = std::env::var("MBTI_DB_DB") {
            tracing::debug!("MBTI_DB_DB env override applied");
            self.system.database_db = db_name;
        }
        if let Ok(course_id) = std::env::var("MBTI_ASSESSMENT_COURSE_ID") {
            self.assessment.course_id = course_id;
        }
        if let Some(timeout) = std::env::var("MBTI_CALL_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.assessment.call_timeout_ms = timeout;
        }
    }

    /// Clamp out-of-range values and warn about suspicious ones.
    pub fn validate(&mut self) {
        let url = &self.system.database_url;
        let normalized = normalize_ws_url(url);
        if !normalized.contains(':') || normalized.starts_with(':') || normalized.ends_with(':') {
            tracing::warn!(
                "Database URL '{}' appears to be missing hostname or port",
                url
            );
        }

        let timeout = self.assessment.call_timeout_ms;
        let clamped = timeout.clamp(MIN_CALL_TIMEOUT_MS, MAX_CALL_TIMEOUT_MS);
        if clamped != timeout {
            tracing::warn!(
                "call_timeout_ms {} out of range, clamping to {}",
                timeout,
                clamped
            );
            self.assessment.call_timeout_ms = clamped;
        }

        if self.assessment.course_id.trim().is_empty() {
            tracing::warn!("assessment.course_id is empty, using default course id");
            self.assessment.course_id = DEFAULT_ASSESSMENT_COURSE_ID.to_string();
        }
    }

    pub fn call_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.assessment.call_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.system.database_url, "127.0.0.1:8000");
        assert_eq!(config.assessment.course_id, DEFAULT_ASSESSMENT_COURSE_ID);
        assert_eq!(config.call_timeout().as_millis(), 15_000);
        assert_eq!(config.runtime.database_user, "root");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [system]
            database_ns = "shop"

            [assessment]
            call_timeout_ms = 2500
            "#,
        )
        .unwrap();
        assert_eq!(config.system.database_ns, "shop");
        assert_eq!(config.system.database_db, "assessments");
        assert_eq!(config.assessment.call_timeout_ms, 2500);
        assert_eq!(config.assessment.course_id, DEFAULT_ASSESSMENT_COURSE_ID);
    }

    #[test]
    fn validate_clamps_timeout_and_restores_course() {
        let mut config = Config::default();
        config.assessment.call_timeout_ms = 5;
        config.assessment.course_id = "  ".into();
        config.validate();
        assert_eq!(config.assessment.call_timeout_ms, MIN_CALL_TIMEOUT_MS);
        assert_eq!(config.assessment.course_id, DEFAULT_ASSESSMENT_COURSE_ID);

        config.assessment.call_timeout_ms = 10_000_000;
        config.validate();
        assert_eq!(config.assessment.call_timeout_ms, MAX_CALL_TIMEOUT_MS);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber built like the binary's and return its output.
    fn logged(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn validation_warnings_reach_the_default_filter() {
        let output = logged(|| {
            let mut config = Config::default();
            config.assessment.call_timeout_ms = 5;
            config.assessment.course_id = String::new();
            config.validate();
        });
        assert!(output.contains("call_timeout_ms 5 out of range, clamping to 100"));
        assert!(output.contains("assessment.course_id is empty"));
    }

    #[test]
    fn url_check_ignores_scheme() {
        let output = logged(|| {
            let mut config = Config::default();
            config.system.database_url = "ws://127.0.0.1:8000".into();
            config.validate();
        });
        assert!(!output.contains("missing hostname or port"));

        let output = logged(|| {
            let mut config = Config::default();
            config.system.database_url = "wss://db.example".into();
            config.validate();
        });
        assert!(output.contains("missing hostname or port"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("[system\nbroken").is_err());
    }
}
