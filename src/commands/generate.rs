//! Implementation of the `taskdoc generate` command.

use super::parse_request;
use crate::agent::CannedResponder;
use crate::cli::GenerateArgs;
use crate::config::RenderConfig;
use crate::error::{Result, TaskdocError};
use crate::pipeline::Pipeline;
use crate::store::NdjsonStore;

/// Execute the `taskdoc generate` command.
///
/// Builds the request and the prompt, takes the agent response from the
/// flags (or the no-response sentinel), runs the pipeline, and writes the
/// PDF artifact into the output directory.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let request = parse_request(&args.request)?;

    let response_text = match (&args.response, &args.response_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::Io(format!(
                "failed to read response file '{}': {}",
                path.display(),
                e
            ))
        })?,
        (None, None) => crate::agent::NO_RESPONSE.to_string(),
    };

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let mut pipeline =
        Pipeline::new(Box::new(CannedResponder::new(response_text))).with_render_config(config);
    if let Some(record_file) = &args.record_file {
        pipeline = pipeline.with_store(Box::new(NdjsonStore::new(record_file)));
    }

    let (_, path) = pipeline.generate_to_file(&request, &args.out_dir)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RequestArgs;
    use std::path::PathBuf;

    fn generate_args(dir: &std::path::Path) -> GenerateArgs {
        GenerateArgs {
            request: RequestArgs {
                task_type: "quiz".to_string(),
                subject: "Geography".to_string(),
                grade: "7".to_string(),
                curriculum: "IEB".to_string(),
                questions: Some(5),
                marks: Some(25),
                term: None,
                week: None,
            },
            response: Some("Q1\nAnswer: B\n".to_string()),
            response_file: None,
            out_dir: dir.to_path_buf(),
            config: None,
            record_file: None,
        }
    }

    #[test]
    fn generate_writes_a_pdf_artifact() {
        let dir = tempfile::tempdir().unwrap();
        cmd_generate(generate_args(dir.path())).unwrap();

        let entries: Vec<PathBuf> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        let name = entries[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("quiz_geography_7_"), "got {name}");
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn generate_appends_a_record_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = generate_args(dir.path());
        let record_file = dir.path().join("records.ndjson");
        args.record_file = Some(record_file.clone());

        cmd_generate(args).unwrap();

        let content = std::fs::read_to_string(&record_file).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn generate_without_response_uses_the_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.response = None;
        // Sentinel is a valid response; generation must succeed.
        cmd_generate(args).unwrap();
    }

    #[test]
    fn generate_reports_missing_response_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.response = None;
        args.response_file = Some(PathBuf::from("/nonexistent/response.txt"));
        assert!(matches!(
            cmd_generate(args).unwrap_err(),
            TaskdocError::Io(_)
        ));
    }
}
