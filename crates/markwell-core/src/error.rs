//! Grading error types.
//!
//! Every variant here is a caller fault: a misconfigured assessment or a
//! lifecycle violation. A blank or missing answer is never an error — it
//! evaluates to zero marks.

use thiserror::Error;

/// Errors produced by the grading engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A list-based question reached the evaluator with no accepted items.
    #[error("list-based question has no accepted answers to divide marks across")]
    EmptyAcceptedAnswers,

    /// A percentage was requested for an assessment declaring zero total marks.
    #[error("assessment total marks is zero; percentage is undefined")]
    ZeroTotalMarks,

    /// An unrecognized question type string was found while parsing.
    #[error("unsupported question type: '{0}'")]
    UnsupportedQuestionType(String),

    /// `submit` was called on an attempt that was already submitted.
    #[error("attempt was already submitted at {finished_at}")]
    AlreadySubmitted { finished_at: chrono::DateTime<chrono::Utc> },

    /// A submitted answer references a question the assessment does not declare.
    #[error("no question '{question_id}' in this assessment")]
    UnknownQuestion { question_id: String },
}

impl Error {
    /// Returns `true` if this error indicates a misconfigured assessment
    /// (as opposed to a lifecycle misuse by the caller).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::EmptyAcceptedAnswers
                | Error::ZeroTotalMarks
                | Error::UnsupportedQuestionType(_)
        )
    }
}
