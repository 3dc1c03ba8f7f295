//! Composed document model and artifact naming.
//!
//! A [`GeneratedDocument`] is the immutable, render-ready form of one
//! generation: title line, date stamp, body text, optional memo, and the
//! artifact file name. It is created once per request and owned by the
//! caller; nothing here is persisted by the core.

use crate::memo::extract_memo;
use crate::task::TaskRequest;
use chrono::{DateTime, NaiveDate, Utc};

/// A composed document, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Centered title, `"{task type title-cased} / Assessment"`.
    pub title_line: String,
    /// Date shown under the title, rendered as `YYYY-MM-DD`.
    pub date_stamp: NaiveDate,
    /// Labeled prompt and response text, verbatim.
    pub body_text: String,
    /// Answer-key memo; `None` for the scheduling (lesson plan) variant.
    pub memo_text: Option<String>,
    /// Artifact file name, `{type}_{subject}_{grade}_{timestamp}.pdf`.
    pub file_name: String,
}

impl GeneratedDocument {
    /// Compose a document from a request, the built prompt, and the raw
    /// agent response.
    ///
    /// The response is embedded verbatim; an empty response produces an
    /// empty `Response:` section, not an error. The memo block is extracted
    /// for every graded task type and omitted for lesson plans.
    pub fn compose(
        request: &TaskRequest,
        prompt: &str,
        response_text: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let memo_text = if request.task_type.is_scheduled() {
            None
        } else {
            Some(extract_memo(response_text))
        };

        Self {
            title_line: format!("{} / Assessment", request.task_type.title_label()),
            date_stamp: at.date_naive(),
            body_text: format!(
                "Task Description:\n{}\n\nResponse:\n{}",
                prompt, response_text
            ),
            memo_text,
            file_name: file_name(request, at),
        }
    }
}

/// Generate the artifact file name for a request.
///
/// Tokens are slugified and joined with underscores; the timestamp carries
/// millisecond resolution so two documents generated in rapid succession by
/// the same caller get distinct names.
pub fn file_name(request: &TaskRequest, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}_{}.pdf",
        slugify(request.task_type.label()),
        slugify(&request.subject),
        slugify(&request.grade),
        at.format("%Y%m%dT%H%M%S%3f")
    )
}

/// Slugify a name token for use in a filename.
///
/// Lowercases, collapses runs of non-alphanumeric characters into single
/// hyphens, and falls back to `"untitled"` for empty or all-punctuation
/// input so the filename never collapses tokens together.
fn slugify(token: &str) -> String {
    let mut slug = String::new();
    let mut last_was_hyphen = false;

    for c in token.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        slug = "untitled".to_string();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Curriculum, Quantities, TaskType};
    use chrono::TimeZone;

    fn request(task_type: TaskType) -> TaskRequest {
        let quantities = if task_type.is_scheduled() {
            Quantities::Scheduled { term: 1, week: 2 }
        } else {
            Quantities::Graded {
                questions: 10,
                total_marks: 50,
            }
        };
        TaskRequest::new(task_type, "Mathematics", "8", Curriculum::Caps, quantities).unwrap()
    }

    fn at_millis(millis: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 15, 9, 30, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(millis as i64))
            .unwrap()
    }

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Mathematics"), "mathematics");
        assert_eq!(slugify("lesson plan"), "lesson-plan");
        assert_eq!(slugify("Life Orientation!"), "life-orientation");
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify("???"), "untitled");
    }

    #[test]
    fn file_name_embeds_all_tokens() {
        let name = file_name(&request(TaskType::Exam), at_millis(0));
        assert_eq!(name, "exam_mathematics_8_20240715T093000000.pdf");
    }

    #[test]
    fn file_names_differ_one_millisecond_apart() {
        let req = request(TaskType::Test);
        let a = file_name(&req, at_millis(1));
        let b = file_name(&req, at_millis(2));
        assert_ne!(a, b);
    }

    #[test]
    fn compose_builds_title_and_date() {
        let doc = GeneratedDocument::compose(
            &request(TaskType::Assessment),
            "prompt text",
            "response text",
            at_millis(0),
        );
        assert_eq!(doc.title_line, "Assessment / Assessment");
        assert_eq!(doc.date_stamp.format("%Y-%m-%d").to_string(), "2024-07-15");
    }

    #[test]
    fn compose_labels_prompt_and_response() {
        let doc = GeneratedDocument::compose(
            &request(TaskType::Quiz),
            "the prompt",
            "the response",
            at_millis(0),
        );
        assert_eq!(
            doc.body_text,
            "Task Description:\nthe prompt\n\nResponse:\nthe response"
        );
    }

    #[test]
    fn compose_extracts_memo_for_graded_types() {
        let doc = GeneratedDocument::compose(
            &request(TaskType::Worksheet),
            "p",
            "Q1: pick one\nAnswer: C\n",
            at_millis(0),
        );
        assert_eq!(doc.memo_text.as_deref(), Some("Memo:\nAnswer: C\n"));
    }

    #[test]
    fn compose_omits_memo_for_lesson_plans() {
        let doc = GeneratedDocument::compose(
            &request(TaskType::LessonPlan),
            "p",
            "Answer: C",
            at_millis(0),
        );
        assert!(doc.memo_text.is_none());
    }

    #[test]
    fn compose_accepts_empty_response() {
        let doc = GeneratedDocument::compose(&request(TaskType::Test), "p", "", at_millis(0));
        assert!(doc.body_text.ends_with("Response:\n"));
        assert_eq!(doc.memo_text.as_deref(), Some("Memo:\n"));
    }
}
