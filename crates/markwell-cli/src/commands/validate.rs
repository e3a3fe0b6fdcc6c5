//! The `markwell validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(assessment_path: PathBuf) -> Result<()> {
    let assessment = markwell_core::parser::parse_assessment(&assessment_path)?;

    println!(
        "Assessment: {} ({} questions, {} marks)",
        assessment.name,
        assessment.questions.len(),
        assessment.total_marks
    );

    let warnings = markwell_core::parser::validate_assessment(&assessment);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Assessment valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
