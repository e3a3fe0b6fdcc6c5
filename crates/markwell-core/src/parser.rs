//! TOML assessment and submission parsing.
//!
//! Loads assessment definitions and student submissions from TOML files,
//! and validates assessments for common configuration mistakes before any
//! grading runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Assessment, Question, QuestionType, Submission};

/// Intermediate TOML structure for assessment files.
#[derive(Debug, Deserialize)]
struct TomlAssessmentFile {
    assessment: TomlAssessmentHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlAssessmentHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    total_marks: u32,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    #[serde(rename = "type")]
    question_type: String,
    #[serde(default)]
    accepted: Vec<String>,
    marks: u32,
}

/// Intermediate TOML structure for submission files.
#[derive(Debug, Deserialize)]
struct TomlSubmissionFile {
    #[serde(default)]
    submissions: Vec<Submission>,
}

/// Parse a single TOML file into an `Assessment`.
pub fn parse_assessment(path: &Path) -> Result<Assessment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read assessment file: {}", path.display()))?;

    parse_assessment_str(&content, path)
}

/// Parse a TOML string into an `Assessment` (useful for testing).
///
/// Question type strings are resolved here; an unknown type is rejected
/// instead of falling through to a zero-mark default.
pub fn parse_assessment_str(content: &str, source_path: &Path) -> Result<Assessment> {
    let parsed: TomlAssessmentFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let question_type: QuestionType = q
                .question_type
                .parse()
                .with_context(|| format!("question '{}'", q.id))?;
            Ok(Question {
                id: q.id,
                prompt: q.prompt,
                question_type,
                accepted: q.accepted,
                marks: q.marks,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Assessment {
        id: parsed.assessment.id,
        name: parsed.assessment.name,
        description: parsed.assessment.description,
        total_marks: parsed.assessment.total_marks,
        questions,
    })
}

/// Parse a TOML file of student submissions.
pub fn parse_submissions(path: &Path) -> Result<Vec<Submission>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submissions file: {}", path.display()))?;
    parse_submissions_str(&content, path)
}

/// Parse a TOML string of student submissions.
pub fn parse_submissions_str(content: &str, source_path: &Path) -> Result<Vec<Submission>> {
    let parsed: TomlSubmissionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;
    Ok(parsed.submissions)
}

/// Recursively load all `.toml` submission files from a directory.
pub fn load_submissions_directory(dir: &Path) -> Result<Vec<Submission>> {
    let mut submissions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            submissions.extend(load_submissions_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_submissions(&path) {
                Ok(parsed) => submissions.extend(parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(submissions)
}

/// A warning from assessment validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an assessment for common issues.
///
/// Warnings cover everything that would make a grading run fail or award
/// nonsense marks: no accepted answers, zero-mark questions, a declared
/// total that disagrees with the question marks, duplicate ids.
pub fn validate_assessment(assessment: &Assessment) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for question in &assessment.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    // Every gradable question needs at least one accepted answer; for
    // list-based questions an empty set would be a division by zero at
    // grading time.
    for question in &assessment.questions {
        let has_items = question
            .accepted
            .iter()
            .flat_map(|entry| entry.split(','))
            .any(|item| !item.trim().is_empty());
        if !has_items {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "no accepted answers".into(),
            });
        }
    }

    for question in &assessment.questions {
        if question.marks == 0 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question is worth zero marks".into(),
            });
        }
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }
    }

    if assessment.total_marks == 0 {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "total_marks is zero; percentages are undefined".into(),
        });
    } else if assessment.total_marks != assessment.max_marks() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "declared total_marks ({}) differs from summed question marks ({})",
                assessment.total_marks,
                assessment.max_marks()
            ),
        });
    }

    warnings
}
