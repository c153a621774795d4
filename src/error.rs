//! Domain-specific error types for the assessment engine

use thiserror::Error;

/// Main error type for the assessment engine.
///
/// Only `IncompleteAssessment` and the misuse variants are hard failures of a
/// scoring call. `PersistenceFailure`, `ProfileUpdateFailure` and
/// `RecommendationLookupFailure` are produced at the completion boundary and
/// reported as warnings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Incomplete assessment: {answered} of {required} questions answered")]
    IncompleteAssessment { answered: usize, required: usize },

    #[error("Persistence failure: {message}")]
    PersistenceFailure { message: String },

    #[error("Profile update failure: {message}")]
    ProfileUpdateFailure { message: String },

    #[error("Recommendation lookup failure ({kind}): {message}")]
    RecommendationLookupFailure { kind: String, message: String },

    #[error("No authenticated identity")]
    IdentityMissing,

    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition { action: String, state: String },

    #[error("Invalid choice '{value}': expected A or B")]
    InvalidChoice { value: String },

    #[error("Invalid personality type: {value}")]
    InvalidType { value: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl AssessmentError {
    /// True for failures that the engine downgrades to host-visible warnings.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AssessmentError::PersistenceFailure { .. }
                | AssessmentError::ProfileUpdateFailure { .. }
                | AssessmentError::RecommendationLookupFailure { .. }
        )
    }
}

impl From<surrealdb::Error> for AssessmentError {
    fn from(err: surrealdb::Error) -> Self {
        AssessmentError::Database {
            message: err.to_string(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_classification() {
        assert!(
            AssessmentError::PersistenceFailure {
                message: "down".into()
            }
            .is_warning()
        );
        assert!(
            !AssessmentError::IncompleteAssessment {
                answered: 3,
                required: 48
            }
            .is_warning()
        );
        assert!(
            AssessmentError::ProfileUpdateFailure {
                message: "down".into()
            }
            .is_warning()
        );
        assert!(!AssessmentError::IdentityMissing.is_warning());
    }

    #[test]
    fn incomplete_message_names_counts() {
        let err = AssessmentError::IncompleteAssessment {
            answered: 47,
            required: 48,
        };
        assert_eq!(
            err.to_string(),
            "Incomplete assessment: 47 of 48 questions answered"
        );
    }
}
