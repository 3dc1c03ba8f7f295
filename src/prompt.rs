//! Prompt builder: renders a task request into the sentence sent to the
//! conversational agent.
//!
//! Two fixed templates, selected by the request's quantities variant. Field
//! values are interpolated verbatim (no locale formatting, no pluralization,
//! empty strings pass through untouched), so the exact phrasing is stable
//! for golden-output tests.

use crate::task::{Quantities, TaskRequest};

/// Build the natural-language task description for a request.
///
/// Total function: every validated [`TaskRequest`] produces a prompt. The
/// graded template states, in fixed order, the task type, subject, grade,
/// curriculum, question count, the "4 options" constraint, and the total
/// marks. The scheduling template states the task type, subject, grade,
/// curriculum, term, and week, and never mentions marks or options.
pub fn build_prompt(request: &TaskRequest) -> String {
    match request.quantities {
        Quantities::Graded {
            questions,
            total_marks,
        } => format!(
            "Generate a {} for the {} subject, targeting grade {} students, \
             following the {} curriculum. The task should include {} questions, \
             each with 4 options, and the total marks should sum up to {}.",
            request.task_type,
            request.subject,
            request.grade,
            request.curriculum,
            questions,
            total_marks,
        ),
        Quantities::Scheduled { term, week } => format!(
            "Generate a {} for the {} subject, targeting grade {} students, \
             following the {} curriculum. The plan should cover term {} and week {}.",
            request.task_type, request.subject, request.grade, request.curriculum, term, week,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Curriculum, TaskType};

    fn graded_request() -> TaskRequest {
        TaskRequest::new(
            TaskType::Assessment,
            "Mathematics",
            "8",
            Curriculum::Caps,
            Quantities::Graded {
                questions: 10,
                total_marks: 50,
            },
        )
        .unwrap()
    }

    fn scheduled_request() -> TaskRequest {
        TaskRequest::new(
            TaskType::LessonPlan,
            "Science",
            "4",
            Curriculum::Ieb,
            Quantities::Scheduled { term: 2, week: 7 },
        )
        .unwrap()
    }

    #[test]
    fn graded_prompt_golden_output() {
        assert_eq!(
            build_prompt(&graded_request()),
            "Generate a assessment for the Mathematics subject, targeting grade 8 \
             students, following the CAPS curriculum. The task should include 10 \
             questions, each with 4 options, and the total marks should sum up to 50."
        );
    }

    #[test]
    fn scheduled_prompt_golden_output() {
        assert_eq!(
            build_prompt(&scheduled_request()),
            "Generate a lesson plan for the Science subject, targeting grade 4 \
             students, following the IEB curriculum. The plan should cover term 2 \
             and week 7."
        );
    }

    #[test]
    fn graded_prompt_fields_appear_in_order() {
        let prompt = build_prompt(&graded_request());
        let positions: Vec<usize> = [
            "assessment",
            "Mathematics",
            "grade 8",
            "CAPS",
            "10 questions",
            "4 options",
            "50",
        ]
        .iter()
        .map(|needle| prompt.find(needle).unwrap_or_else(|| panic!("missing '{needle}'")))
        .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "fields out of order in: {prompt}"
        );
    }

    #[test]
    fn scheduled_prompt_never_mentions_marks_or_options() {
        let prompt = build_prompt(&scheduled_request());
        assert!(prompt.contains("lesson plan"));
        assert!(prompt.contains("term 2"));
        assert!(prompt.contains("week 7"));
        assert!(!prompt.contains("marks"));
        assert!(!prompt.contains("options"));
    }

    #[test]
    fn empty_strings_interpolate_verbatim() {
        let req = TaskRequest::new(
            TaskType::Quiz,
            "",
            "",
            Curriculum::Ieb,
            Quantities::Graded {
                questions: 1,
                total_marks: 1,
            },
        )
        .unwrap();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("for the  subject"));
        assert!(prompt.contains("targeting grade  students"));
    }
}
