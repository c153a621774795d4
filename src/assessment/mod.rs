//! Assessment core: question bank, session state, scoring and type metadata.
//! Deterministic and free of I/O.

pub mod profiles;
pub mod questions;
pub mod scorer;
pub mod session;
pub mod types;

pub use profiles::{TypeProfile, profile_for};
pub use questions::{QUESTION_COUNT, QUESTIONS, Question};
pub use scorer::{ScoreTally, Scored, derive_type, score};
pub use session::{AnswerSet, SessionState};
pub use types::{Choice, Dimension, PersonalityType, Trait};
