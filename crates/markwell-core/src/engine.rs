//! Attempt lifecycle and grading orchestration.
//!
//! An [`Attempt`] owns one response slot per question. Submission is the
//! single transition that evaluates every recorded answer, freezes the
//! responses, and caches the aggregate score; the cached value is strictly
//! derived and [`Attempt::total_score`] recomputes it on demand.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::evaluate::{evaluate, Evaluation};
use crate::model::{Assessment, Submission};
use crate::score::{percentage, GradingScale};

/// Lifecycle states of an attempt. Submission evaluates and closes in one
/// step; there is no separate graded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Submitted,
}

/// One answer slot within an attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// The question this response answers.
    pub question_id: String,
    /// Raw answer text as submitted; list answers are one comma-separated
    /// string. `None` when the student left the question blank.
    pub text: Option<String>,
    /// Whether the response earned full marks. Meaningful after submission.
    pub is_correct: bool,
    /// Marks awarded, within `[0, question.marks]`. Zero until evaluated.
    pub marks_awarded: u32,
    /// Diagnostic edit distance for textual questions.
    pub edit_distance: Option<usize>,
    /// Optional manual note from a grader; never set by the engine.
    #[serde(default)]
    pub feedback: Option<String>,
}

impl Response {
    fn pending(question_id: &str, text: Option<String>) -> Self {
        Response {
            question_id: question_id.to_string(),
            text,
            is_correct: false,
            marks_awarded: 0,
            edit_distance: None,
            feedback: None,
        }
    }

    fn apply(&mut self, evaluation: Evaluation) {
        self.is_correct = evaluation.is_correct;
        self.marks_awarded = evaluation.marks_awarded;
        self.edit_distance = evaluation.edit_distance;
    }
}

/// One student's engagement with an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: Uuid,
    pub student: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: AttemptStatus,
    responses: HashMap<String, Response>,
    /// Cached total refreshed by `submit`, cleared by `record_answer`.
    total: Option<u32>,
}

impl Attempt {
    /// Open a fresh attempt.
    pub fn begin(student: &str, now: DateTime<Utc>) -> Self {
        Attempt {
            id: Uuid::new_v4(),
            student: student.to_string(),
            started_at: now,
            finished_at: None,
            status: AttemptStatus::InProgress,
            responses: HashMap::new(),
            total: None,
        }
    }

    /// Record (or replace) the answer for one question. Rejected once the
    /// attempt has been submitted — responses are frozen after evaluation.
    pub fn record_answer(&mut self, question_id: &str, text: Option<String>) -> Result<(), Error> {
        if let Some(finished_at) = self.finished_at {
            return Err(Error::AlreadySubmitted { finished_at });
        }
        self.total = None;
        self.responses
            .insert(question_id.to_string(), Response::pending(question_id, text));
        Ok(())
    }

    /// The response slots, keyed by question id.
    pub fn responses(&self) -> &HashMap<String, Response> {
        &self.responses
    }

    /// Sum of awarded marks across all responses. Order-independent and
    /// recomputed from the response map every call.
    pub fn total_score(&self) -> u32 {
        self.responses.values().map(|r| r.marks_awarded).sum()
    }

    /// The total cached at submission, if any.
    pub fn cached_total(&self) -> Option<u32> {
        self.total
    }

    /// Evaluate every recorded answer against the assessment, close the
    /// attempt, and cache the aggregate score.
    ///
    /// Re-submitting is rejected with [`Error::AlreadySubmitted`]; a graded
    /// total must not silently move after the fact. An answer for a
    /// question the assessment does not declare is
    /// [`Error::UnknownQuestion`].
    pub fn submit(&mut self, assessment: &Assessment, now: DateTime<Utc>) -> Result<u32, Error> {
        if let Some(finished_at) = self.finished_at {
            return Err(Error::AlreadySubmitted { finished_at });
        }

        for response in self.responses.values_mut() {
            let question =
                assessment
                    .question(&response.question_id)
                    .ok_or_else(|| Error::UnknownQuestion {
                        question_id: response.question_id.clone(),
                    })?;
            let evaluation = evaluate(
                response.text.as_deref(),
                &question.accepted,
                question.question_type,
                question.marks,
            )?;
            response.apply(evaluation);
        }

        self.finished_at = Some(now);
        self.status = AttemptStatus::Submitted;
        let total = self.total_score();
        self.total = Some(total);
        Ok(total)
    }
}

/// A submitted attempt together with its derived assessment-level scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedAttempt {
    pub attempt: Attempt,
    pub total_score: u32,
    pub percentage: f64,
    pub grade: String,
}

/// Grades whole submissions against an assessment under one grading scale.
pub struct Grader {
    scale: GradingScale,
}

impl Grader {
    pub fn new(scale: GradingScale) -> Self {
        Grader { scale }
    }

    /// Build an attempt from a submission, submit it, and derive the
    /// percentage and letter grade.
    ///
    /// Answers for undeclared question ids are skipped with a warning so a
    /// stray key cannot sink an otherwise valid submission.
    pub fn grade(
        &self,
        assessment: &Assessment,
        submission: &Submission,
        now: DateTime<Utc>,
    ) -> Result<GradedAttempt, Error> {
        let mut attempt = Attempt::begin(&submission.student, now);
        for (question_id, text) in &submission.answers {
            if assessment.question(question_id).is_none() {
                tracing::warn!(
                    student = %submission.student,
                    question_id,
                    "answer for undeclared question, skipping"
                );
                continue;
            }
            attempt.record_answer(question_id, Some(text.clone()))?;
        }

        let total_score = attempt.submit(assessment, now)?;
        let percentage = percentage(total_score, assessment.total_marks)?;
        let grade = self.scale.grade(percentage).to_string();

        Ok(GradedAttempt {
            attempt,
            total_score,
            percentage,
            grade,
        })
    }
}
