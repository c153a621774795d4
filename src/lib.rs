//! MBTI personality assessment engine.
//!
//! A 48-question forced-choice quiz, deterministic scoring into one of the 16
//! types, persistence of each user's latest result, and career/course
//! recommendations keyed by type.

pub mod access;
pub mod assessment;
pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod presentation;
pub mod store;

pub use access::{AccessGate, AccessStatus};
pub use engine::{AssessmentEngine, Completion, PersistOutcome};
pub use error::{AssessmentError, Result};
