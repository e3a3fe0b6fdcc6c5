//! The `markwell init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("assessment.toml").exists() {
        println!("assessment.toml already exists, skipping.");
    } else {
        std::fs::write("assessment.toml", SAMPLE_ASSESSMENT)?;
        println!("Created assessment.toml");
    }

    if std::path::Path::new("submissions.toml").exists() {
        println!("submissions.toml already exists, skipping.");
    } else {
        std::fs::write("submissions.toml", SAMPLE_SUBMISSIONS)?;
        println!("Created submissions.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit assessment.toml with your questions and accepted answers");
    println!("  2. Run: markwell validate --assessment assessment.toml");
    println!("  3. Run: markwell grade --assessment assessment.toml --submissions submissions.toml");

    Ok(())
}

const SAMPLE_ASSESSMENT: &str = r#"[assessment]
id = "example"
name = "Example Assessment"
description = "A starter assessment showing each question type"
total_marks = 20

[[questions]]
id = "q1"
prompt = "What is the capital of France?"
type = "short_answer"
accepted = ["Paris"]
marks = 5

[[questions]]
id = "q2"
prompt = "Which planet is known as the Red Planet? (a) Venus (b) Mars (c) Jupiter"
type = "multiple_choice"
accepted = ["b"]
marks = 2

[[questions]]
id = "q3"
prompt = "Name the three primary colours."
type = "list_based"
accepted = ["red", "yellow", "blue"]
marks = 9

[[questions]]
id = "q4"
prompt = "Water boils at 100 degrees Celsius at sea level."
type = "true_false"
accepted = ["true"]
marks = 4
"#;

const SAMPLE_SUBMISSIONS: &str = r#"[[submissions]]
student = "alice"

[submissions.answers]
q1 = "paris"
q2 = "b"
q3 = "blue, red"
q4 = "true"

[[submissions]]
student = "bob"

[submissions.answers]
q1 = "Lyon"
q2 = "a"
q3 = "red, yellow, blue"
q4 = "false"
"#;
