//! Cohort-level aggregate statistics.
//!
//! Computed over the graded attempts of one assessment run: how the cohort
//! did overall, and which questions discriminated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::GradedAttempt;
use crate::model::Assessment;

/// Aggregates across every graded attempt of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortStats {
    /// Number of graded attempts.
    pub attempts: usize,
    /// Mean percentage across attempts.
    pub mean_percentage: f64,
    /// Median percentage across attempts.
    pub median_percentage: f64,
    /// Count of attempts per letter grade.
    pub grade_distribution: BTreeMap<String, usize>,
    /// Per-question difficulty, keyed by question id.
    pub per_question: BTreeMap<String, QuestionStats>,
}

/// How one question was answered across the cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStats {
    /// Question identifier.
    pub question_id: String,
    /// Attempts that recorded any answer for this question.
    pub answered: usize,
    /// Fraction of all attempts that earned full marks here.
    pub correct_rate: f64,
    /// Mean fraction of the question's marks awarded; a blank answer
    /// counts as zero.
    pub mean_marks_fraction: f64,
}

/// Compute cohort statistics from graded attempts.
pub fn compute_cohort_stats(graded: &[GradedAttempt], assessment: &Assessment) -> CohortStats {
    let attempts = graded.len();

    let mut percentages: Vec<f64> = graded.iter().map(|g| g.percentage).collect();
    percentages.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean_percentage = if attempts == 0 {
        0.0
    } else {
        percentages.iter().sum::<f64>() / attempts as f64
    };
    let median_percentage = match attempts {
        0 => 0.0,
        n if n % 2 == 1 => percentages[n / 2],
        n => (percentages[n / 2 - 1] + percentages[n / 2]) / 2.0,
    };

    let mut grade_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for g in graded {
        *grade_distribution.entry(g.grade.clone()).or_default() += 1;
    }

    let mut per_question = BTreeMap::new();
    for question in &assessment.questions {
        let mut answered = 0usize;
        let mut correct = 0usize;
        let mut fraction_sum = 0.0f64;

        for g in graded {
            if let Some(response) = g.attempt.responses().get(&question.id) {
                answered += 1;
                if response.is_correct {
                    correct += 1;
                }
                if question.marks > 0 {
                    fraction_sum +=
                        f64::from(response.marks_awarded) / f64::from(question.marks);
                }
            }
        }

        per_question.insert(
            question.id.clone(),
            QuestionStats {
                question_id: question.id.clone(),
                answered,
                correct_rate: if attempts == 0 {
                    0.0
                } else {
                    correct as f64 / attempts as f64
                },
                mean_marks_fraction: if attempts == 0 {
                    0.0
                } else {
                    fraction_sum / attempts as f64
                },
            },
        );
    }

    CohortStats {
        attempts,
        mean_percentage,
        median_percentage,
        grade_distribution,
        per_question,
    }
}
