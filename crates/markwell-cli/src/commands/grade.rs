//! The `markwell grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use markwell_core::engine::Grader;
use markwell_core::parser;
use markwell_core::report::GradingReport;
use markwell_core::score::{GradeBand, GradingScale};

/// On-disk shape of a grading scale file.
#[derive(Debug, Deserialize)]
struct ScaleFile {
    bands: Vec<GradeBand>,
}

fn load_scale(path: Option<&PathBuf>) -> Result<GradingScale> {
    let Some(path) = path else {
        return Ok(GradingScale::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scale file: {}", path.display()))?;
    let parsed: ScaleFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse scale TOML: {}", path.display()))?;
    anyhow::ensure!(!parsed.bands.is_empty(), "scale file declares no bands");
    Ok(GradingScale::new(parsed.bands))
}

pub fn execute(
    assessment_path: PathBuf,
    submissions_path: PathBuf,
    scale_path: Option<PathBuf>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let assessment = parser::parse_assessment(&assessment_path)?;

    // Surface configuration problems before grading anything.
    let warnings = parser::validate_assessment(&assessment);
    for warning in &warnings {
        match &warning.question_id {
            Some(id) => eprintln!("Warning [{id}]: {}", warning.message),
            None => eprintln!("Warning: {}", warning.message),
        }
    }

    let submissions = if submissions_path.is_dir() {
        parser::load_submissions_directory(&submissions_path)?
    } else {
        parser::parse_submissions(&submissions_path)?
    };
    anyhow::ensure!(
        !submissions.is_empty(),
        "no submissions found in {}",
        submissions_path.display()
    );

    let scale = load_scale(scale_path.as_ref())?;
    let grader = Grader::new(scale);
    let now = chrono::Utc::now();

    let graded = submissions
        .iter()
        .map(|submission| {
            grader
                .grade(&assessment, submission, now)
                .with_context(|| format!("failed to grade submission from '{}'", submission.student))
        })
        .collect::<Result<Vec<_>>>()?;

    let report = GradingReport::build(&assessment, &graded);

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = now.format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "markdown" => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, report.to_markdown())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("Markdown report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(report: &GradingReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Student", "Score", "Percentage", "Grade"]);

    for attempt in &report.attempts {
        table.add_row(vec![
            Cell::new(&attempt.student),
            Cell::new(format!(
                "{}/{}",
                attempt.total_score, report.assessment.total_marks
            )),
            Cell::new(format!("{:.1}%", attempt.percentage)),
            Cell::new(markwell_core::score::display_grade(
                attempt.grade.as_deref(),
            )),
        ]);
    }

    println!("{table}");
    println!(
        "\n{} attempts graded — mean {:.1}%, median {:.1}%",
        report.cohort.attempts, report.cohort.mean_percentage, report.cohort.median_percentage
    );
}
