//! markwell CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "markwell", version, about = "Assessment grading engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade submissions against an assessment
    Grade {
        /// Path to the assessment .toml file
        #[arg(long)]
        assessment: PathBuf,

        /// Path to a submissions .toml file or a directory of them
        #[arg(long)]
        submissions: PathBuf,

        /// Optional grading scale .toml (defaults to the built-in A-F scale)
        #[arg(long)]
        scale: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "./markwell-results")]
        output: PathBuf,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate an assessment TOML file
    Validate {
        /// Path to the assessment .toml file
        #[arg(long)]
        assessment: PathBuf,
    },

    /// Create a starter assessment and submissions file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markwell=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            assessment,
            submissions,
            scale,
            output,
            format,
        } => commands::grade::execute(assessment, submissions, scale, output, format),
        Commands::Validate { assessment } => commands::validate::execute(assessment),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
