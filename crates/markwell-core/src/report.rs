//! Grading report types with JSON persistence and a markdown summary.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::GradedAttempt;
use crate::model::Assessment;
use crate::score::display_grade;
use crate::statistics::{compute_cohort_stats, CohortStats};

/// A complete grading run over one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the assessment.
    pub assessment: AssessmentSummary,
    /// Per-attempt results.
    pub attempts: Vec<AttemptReport>,
    /// Cohort statistics.
    pub cohort: CohortStats,
}

/// Summary of an assessment (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub id: String,
    pub name: String,
    pub total_marks: u32,
    pub question_count: usize,
}

/// One graded attempt as it appears in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptReport {
    pub attempt_id: Uuid,
    pub student: String,
    pub submitted_at: Option<DateTime<Utc>>,
    /// Per-question breakdown, in the assessment's question order.
    pub responses: Vec<ResponseReport>,
    pub total_score: u32,
    pub percentage: f64,
    /// `None` for a record that was never scored; rendered as "N/A".
    pub grade: Option<String>,
}

/// One response as it appears in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseReport {
    pub question_id: String,
    pub answer: Option<String>,
    pub is_correct: bool,
    pub marks_awarded: u32,
    pub max_marks: u32,
    /// Diagnostic distance for textual questions; not a grading input.
    pub edit_distance: Option<usize>,
}

impl GradingReport {
    /// Assemble a report from graded attempts.
    pub fn build(assessment: &Assessment, graded: &[GradedAttempt]) -> Self {
        let attempts = graded
            .iter()
            .map(|g| {
                let responses = assessment
                    .questions
                    .iter()
                    .map(|question| match g.attempt.responses().get(&question.id) {
                        Some(response) => ResponseReport {
                            question_id: question.id.clone(),
                            answer: response.text.clone(),
                            is_correct: response.is_correct,
                            marks_awarded: response.marks_awarded,
                            max_marks: question.marks,
                            edit_distance: response.edit_distance,
                        },
                        None => ResponseReport {
                            question_id: question.id.clone(),
                            answer: None,
                            is_correct: false,
                            marks_awarded: 0,
                            max_marks: question.marks,
                            edit_distance: None,
                        },
                    })
                    .collect();

                AttemptReport {
                    attempt_id: g.attempt.id,
                    student: g.attempt.student.clone(),
                    submitted_at: g.attempt.finished_at,
                    responses,
                    total_score: g.total_score,
                    percentage: g.percentage,
                    grade: Some(g.grade.clone()),
                }
            })
            .collect();

        GradingReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            assessment: AssessmentSummary {
                id: assessment.id.clone(),
                name: assessment.name.clone(),
                total_marks: assessment.total_marks,
                question_count: assessment.questions.len(),
            },
            attempts,
            cohort: compute_cohort_stats(graded, assessment),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradingReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "# {} — grading report\n\n{} attempts, mean {:.1}%, median {:.1}%\n\n",
            self.assessment.name,
            self.cohort.attempts,
            self.cohort.mean_percentage,
            self.cohort.median_percentage
        ));

        md.push_str("| Student | Score | Percentage | Grade |\n");
        md.push_str("|---------|-------|------------|-------|\n");
        for attempt in &self.attempts {
            md.push_str(&format!(
                "| {} | {}/{} | {:.1}% | {} |\n",
                attempt.student,
                attempt.total_score,
                self.assessment.total_marks,
                attempt.percentage,
                display_grade(attempt.grade.as_deref()),
            ));
        }
        md.push('\n');

        if !self.cohort.per_question.is_empty() {
            md.push_str("## Question difficulty\n\n");
            md.push_str("| Question | Answered | Correct rate | Mean marks |\n");
            md.push_str("|----------|----------|--------------|------------|\n");
            for stats in self.cohort.per_question.values() {
                md.push_str(&format!(
                    "| {} | {} | {:.0}% | {:.0}% |\n",
                    stats.question_id,
                    stats.answered,
                    stats.correct_rate * 100.0,
                    stats.mean_marks_fraction * 100.0
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Grader;
    use crate::model::{Question, QuestionType, Submission};
    use crate::score::GradingScale;

    fn assessment() -> Assessment {
        Assessment {
            id: "rpt-1".into(),
            name: "Report Fixture".into(),
            description: String::new(),
            total_marks: 10,
            questions: vec![
                Question {
                    id: "q1".into(),
                    prompt: "Capital of France?".into(),
                    question_type: QuestionType::ShortAnswer,
                    accepted: vec!["Paris".into()],
                    marks: 5,
                },
                Question {
                    id: "q2".into(),
                    prompt: "Capital of Italy?".into(),
                    question_type: QuestionType::ShortAnswer,
                    accepted: vec!["Rome".into()],
                    marks: 5,
                },
            ],
        }
    }

    fn graded_fixture() -> Vec<GradedAttempt> {
        let assessment = assessment();
        let grader = Grader::new(GradingScale::default());
        let submission = Submission {
            student: "alice".into(),
            answers: [("q1".to_string(), "pariss".to_string())]
                .into_iter()
                .collect(),
        };
        vec![grader.grade(&assessment, &submission, Utc::now()).unwrap()]
    }

    #[test]
    fn build_orders_responses_and_fills_blanks() {
        let report = GradingReport::build(&assessment(), &graded_fixture());
        let attempt = &report.attempts[0];

        assert_eq!(attempt.responses.len(), 2);
        assert_eq!(attempt.responses[0].question_id, "q1");
        assert_eq!(attempt.responses[0].edit_distance, Some(1));
        // q2 was never answered.
        assert_eq!(attempt.responses[1].answer, None);
        assert_eq!(attempt.responses[1].marks_awarded, 0);
        assert_eq!(attempt.responses[1].max_marks, 5);
    }

    #[test]
    fn json_roundtrip() {
        let report = GradingReport::build(&assessment(), &graded_fixture());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = GradingReport::load_json(&path).unwrap();

        assert_eq!(loaded.assessment.id, "rpt-1");
        assert_eq!(loaded.attempts.len(), 1);
        assert_eq!(loaded.attempts[0].grade.as_deref(), Some("F"));
    }

    #[test]
    fn markdown_output() {
        let report = GradingReport::build(&assessment(), &graded_fixture());
        let md = report.to_markdown();
        assert!(md.contains("Report Fixture"));
        assert!(md.contains("| alice | 0/10 | 0.0% | F |"));
        assert!(md.contains("Question difficulty"));
    }

    #[test]
    fn unscored_grade_renders_as_sentinel() {
        let mut report = GradingReport::build(&assessment(), &graded_fixture());
        report.attempts[0].grade = None;
        let md = report.to_markdown();
        assert!(md.contains("| alice | 0/10 | 0.0% | N/A |"));
    }
}
