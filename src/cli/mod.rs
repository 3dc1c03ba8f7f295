//! CLI argument parsing for taskdoc.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; actual implementations are in the
//! `commands` module. The CLI stands in for the host UI: it collects the
//! same typed form fields and hands the core a validated request.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Taskdoc: educational task prompt builder and printable PDF pipeline.
///
/// A generation runs three steps: build a task-description prompt from the
/// form fields, take the agent's reply (supplied here as a string or file),
/// and render a printable PDF with an extracted answer-key memo.
#[derive(Parser, Debug)]
#[command(name = "taskdoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskdoc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a task document PDF.
    ///
    /// Builds the prompt, reads the agent response from --response or
    /// --response-file (or uses the no-response sentinel), extracts the
    /// memo, and writes the PDF artifact.
    Generate(GenerateArgs),

    /// Print the task-description prompt for a request and exit.
    Prompt(RequestArgs),

    /// Extract the answer-key memo from a response file and print it.
    Memo(MemoArgs),
}

/// The typed form fields shared by `generate` and `prompt`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Task type (assessment, project, test, lesson plan, exam, worksheet, quiz).
    #[arg(short = 't', long)]
    pub task_type: String,

    /// Subject name (e.g. "Mathematics").
    #[arg(short, long)]
    pub subject: String,

    /// Grade level (e.g. "R", "8").
    #[arg(short, long)]
    pub grade: String,

    /// Curriculum (CAPS or IEB).
    #[arg(short, long, default_value = "CAPS")]
    pub curriculum: String,

    /// Number of questions (graded task types).
    #[arg(long, conflicts_with_all = ["term", "week"])]
    pub questions: Option<u32>,

    /// Total marks (graded task types).
    #[arg(long, conflicts_with_all = ["term", "week"])]
    pub marks: Option<u32>,

    /// School term (lesson plans).
    #[arg(long)]
    pub term: Option<u32>,

    /// Week within the term (lesson plans).
    #[arg(long)]
    pub week: Option<u32>,
}

/// Arguments for `taskdoc generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Agent response text, verbatim.
    #[arg(long, conflicts_with = "response_file")]
    pub response: Option<String>,

    /// File containing the agent response text.
    #[arg(long)]
    pub response_file: Option<PathBuf>,

    /// Directory to write the PDF artifact into.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Render configuration YAML file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// NDJSON file to append a generation record to.
    #[arg(long)]
    pub record_file: Option<PathBuf>,
}

/// Arguments for `taskdoc memo`.
#[derive(Args, Debug)]
pub struct MemoArgs {
    /// File containing the agent response text.
    pub response_file: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
