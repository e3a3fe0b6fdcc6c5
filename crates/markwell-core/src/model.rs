//! Core data model types for markwell.
//!
//! These are the fundamental types the whole system uses to represent
//! assessments, questions, and incoming student submissions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a question is answered, and therefore how it is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// One option selected from a fixed set; graded by exact normalized match.
    MultipleChoice,
    /// Free text; graded by exact normalized match against the model answer.
    ShortAnswer,
    /// Comma-separated items; graded proportionally per correct item.
    ListBased,
    /// Two-valued free text ("true"/"false"); graded like a short answer.
    TrueFalse,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::ShortAnswer => write!(f, "short_answer"),
            QuestionType::ListBased => write!(f, "list_based"),
            QuestionType::TrueFalse => write!(f, "true_false"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice" | "mcq" => Ok(QuestionType::MultipleChoice),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "list_based" | "list" => Ok(QuestionType::ListBased),
            "true_false" | "boolean" => Ok(QuestionType::TrueFalse),
            other => Err(Error::UnsupportedQuestionType(other.to_string())),
        }
    }
}

/// A single gradable question within an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the assessment.
    pub id: String,
    /// The text shown to the student.
    pub prompt: String,
    /// How this question is graded.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Accepted correct answers, in priority order. For list-based
    /// questions the items (possibly comma-joined) form the canonical list
    /// that marks are divided across.
    #[serde(default)]
    pub accepted: Vec<String>,
    /// Maximum marks awardable for this question.
    pub marks: u32,
}

/// A collection of questions graded as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier for this assessment.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this assessment covers.
    #[serde(default)]
    pub description: String,
    /// Declared total marks. Should equal the sum of question marks;
    /// `validate_assessment` warns when it does not.
    pub total_marks: u32,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Assessment {
    /// Sum of the per-question maximum marks.
    pub fn max_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// One student's raw answers, keyed by question id.
///
/// A `BTreeMap` keeps report output stable across runs; grading itself is
/// order-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Who submitted.
    pub student: String,
    /// Raw answer text per question id. List answers are one
    /// comma-separated string.
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}
