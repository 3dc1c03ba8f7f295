//! Command implementations for taskdoc.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the conversion from raw CLI flags into a validated
//! [`TaskRequest`]. Tag parsing fails closed here, at the boundary, so the
//! pipeline only ever sees well-formed requests.

mod generate;

use crate::cli::{Command, MemoArgs, RequestArgs};
use crate::error::{Result, TaskdocError};
use crate::memo::extract_memo;
use crate::prompt::build_prompt;
use crate::task::{Curriculum, Quantities, TaskRequest, TaskType};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Prompt(args) => cmd_prompt(args),
        Command::Memo(args) => cmd_memo(args),
    }
}

/// Build a validated request from raw CLI flags.
pub fn parse_request(args: &RequestArgs) -> Result<TaskRequest> {
    let task_type = TaskType::parse(&args.task_type)?;
    let curriculum = Curriculum::parse(&args.curriculum)?;

    let quantities = if task_type.is_scheduled() {
        match (args.term, args.week) {
            (Some(term), Some(week)) => Quantities::Scheduled { term, week },
            _ => {
                return Err(TaskdocError::MalformedInput(
                    "lesson plans require --term and --week".to_string(),
                ));
            }
        }
    } else {
        match (args.questions, args.marks) {
            (Some(questions), Some(total_marks)) => Quantities::Graded {
                questions,
                total_marks,
            },
            _ => {
                return Err(TaskdocError::MalformedInput(format!(
                    "{} tasks require --questions and --marks",
                    task_type
                )));
            }
        }
    };

    TaskRequest::new(task_type, &args.subject, &args.grade, curriculum, quantities)
}

fn cmd_prompt(args: RequestArgs) -> Result<()> {
    let request = parse_request(&args)?;
    println!("{}", build_prompt(&request));
    Ok(())
}

fn cmd_memo(args: MemoArgs) -> Result<()> {
    let response_text = std::fs::read_to_string(&args.response_file).map_err(|e| {
        TaskdocError::Io(format!(
            "failed to read response file '{}': {}",
            args.response_file.display(),
            e
        ))
    })?;
    print!("{}", extract_memo(&response_text));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_args(task_type: &str) -> RequestArgs {
        RequestArgs {
            task_type: task_type.to_string(),
            subject: "Mathematics".to_string(),
            grade: "8".to_string(),
            curriculum: "CAPS".to_string(),
            questions: None,
            marks: None,
            term: None,
            week: None,
        }
    }

    #[test]
    fn parse_request_builds_graded_quantities() {
        let mut args = request_args("exam");
        args.questions = Some(12);
        args.marks = Some(60);
        let request = parse_request(&args).unwrap();
        assert_eq!(
            request.quantities,
            Quantities::Graded {
                questions: 12,
                total_marks: 60
            }
        );
    }

    #[test]
    fn parse_request_builds_scheduled_quantities() {
        let mut args = request_args("lesson plan");
        args.term = Some(3);
        args.week = Some(5);
        let request = parse_request(&args).unwrap();
        assert_eq!(request.quantities, Quantities::Scheduled { term: 3, week: 5 });
    }

    #[test]
    fn parse_request_requires_matching_flags() {
        let err = parse_request(&request_args("exam")).unwrap_err();
        assert!(err.to_string().contains("--questions"));

        let mut args = request_args("lesson plan");
        args.questions = Some(10); // wrong pair for a lesson plan
        let err = parse_request(&args).unwrap_err();
        assert!(err.to_string().contains("--term"));
    }

    #[test]
    fn parse_request_fails_closed_on_unknown_tags() {
        let mut args = request_args("homework");
        args.questions = Some(1);
        args.marks = Some(1);
        assert!(matches!(
            parse_request(&args).unwrap_err(),
            TaskdocError::MalformedInput(_)
        ));

        let mut args = request_args("quiz");
        args.curriculum = "GCSE".to_string();
        args.questions = Some(1);
        args.marks = Some(1);
        assert!(matches!(
            parse_request(&args).unwrap_err(),
            TaskdocError::MalformedInput(_)
        ));
    }
}
