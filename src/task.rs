//! Task request model for taskdoc.
//!
//! A [`TaskRequest`] is the typed, validated description of a single
//! document-generation request. Tag parsing happens exactly once, at this
//! boundary: an unknown task type or curriculum fails closed with a
//! descriptive error instead of silently defaulting, because downstream
//! template selection and document layout branch on these tags.
//!
//! The two numeric form fields are a tagged union, not two overloaded
//! integers: the "lesson plan" task type carries `(term, week)` while every
//! other task type carries `(questions, total_marks)`.

use crate::error::{Result, TaskdocError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of educational task to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// A graded assessment.
    Assessment,
    /// A graded project brief.
    Project,
    /// A graded class test.
    Test,
    /// A scheduled lesson plan (term/week, not questions/marks).
    LessonPlan,
    /// A graded exam paper.
    Exam,
    /// A graded worksheet.
    Worksheet,
    /// A graded quiz.
    Quiz,
}

impl TaskType {
    /// All recognized task type tags, as accepted by [`TaskType::parse`].
    pub const TAGS: [&'static str; 7] = [
        "assessment",
        "project",
        "test",
        "lesson plan",
        "exam",
        "worksheet",
        "quiz",
    ];

    /// Parse a task type tag.
    ///
    /// Matching is case-insensitive and accepts `lesson_plan`/`lesson-plan`
    /// spellings for the scheduling variant. Unknown tags fail closed.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "assessment" => Ok(Self::Assessment),
            "project" => Ok(Self::Project),
            "test" => Ok(Self::Test),
            "lesson plan" | "lesson_plan" | "lesson-plan" => Ok(Self::LessonPlan),
            "exam" => Ok(Self::Exam),
            "worksheet" => Ok(Self::Worksheet),
            "quiz" => Ok(Self::Quiz),
            _ => Err(TaskdocError::MalformedInput(format!(
                "unknown task type '{}' (expected one of: {})",
                tag,
                Self::TAGS.join(", ")
            ))),
        }
    }

    /// Lowercase tag used in prompts and file names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Project => "project",
            Self::Test => "test",
            Self::LessonPlan => "lesson plan",
            Self::Exam => "exam",
            Self::Worksheet => "worksheet",
            Self::Quiz => "quiz",
        }
    }

    /// Title-cased form used on the rendered document's title line.
    pub fn title_label(&self) -> &'static str {
        match self {
            Self::Assessment => "Assessment",
            Self::Project => "Project",
            Self::Test => "Test",
            Self::LessonPlan => "Lesson Plan",
            Self::Exam => "Exam",
            Self::Worksheet => "Worksheet",
            Self::Quiz => "Quiz",
        }
    }

    /// Whether this is the scheduling variant, whose numeric fields mean
    /// `(term, week)` and whose document carries no memo block.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::LessonPlan)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// School curriculum the task targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Curriculum {
    /// South African national Curriculum and Assessment Policy Statement.
    Caps,
    /// Independent Examinations Board.
    Ieb,
}

impl Curriculum {
    /// Parse a curriculum tag. Unknown tags fail closed.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "CAPS" => Ok(Self::Caps),
            "IEB" => Ok(Self::Ieb),
            _ => Err(TaskdocError::MalformedInput(format!(
                "unknown curriculum '{}' (expected CAPS or IEB)",
                tag
            ))),
        }
    }
}

impl fmt::Display for Curriculum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caps => f.write_str("CAPS"),
            Self::Ieb => f.write_str("IEB"),
        }
    }
}

/// The numeric half of a request, tagged by what the numbers mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantities {
    /// Question count and total marks, for every graded task type.
    Graded {
        /// Number of questions the task should contain.
        questions: u32,
        /// Total marks the questions should sum to.
        total_marks: u32,
    },
    /// Term and week, for the lesson plan variant.
    Scheduled {
        /// School term (1-4 in the source forms).
        term: u32,
        /// Week within the term.
        week: u32,
    },
}

/// A validated document-generation request.
///
/// Construct through [`TaskRequest::new`] so the task type and quantities
/// pairing is checked once, here, rather than re-checked at every call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// The kind of task to generate.
    pub task_type: TaskType,
    /// Subject name, interpolated verbatim (empty strings included).
    pub subject: String,
    /// Grade level ("R", "1" .. "12" in the source forms), verbatim.
    pub grade: String,
    /// Curriculum the task targets.
    pub curriculum: Curriculum,
    /// Question count/marks or term/week, depending on the task type.
    pub quantities: Quantities,
}

impl TaskRequest {
    /// Create a request, validating that the quantities variant matches the
    /// task type: `LessonPlan` pairs with `Scheduled`, everything else with
    /// `Graded`.
    pub fn new(
        task_type: TaskType,
        subject: impl Into<String>,
        grade: impl Into<String>,
        curriculum: Curriculum,
        quantities: Quantities,
    ) -> Result<Self> {
        match (task_type.is_scheduled(), quantities) {
            (true, Quantities::Graded { .. }) => Err(TaskdocError::MalformedInput(
                "lesson plan requests take term/week, not questions/marks".to_string(),
            )),
            (false, Quantities::Scheduled { .. }) => Err(TaskdocError::MalformedInput(format!(
                "{} requests take questions/marks, not term/week",
                task_type
            ))),
            _ => Ok(Self {
                task_type,
                subject: subject.into(),
                grade: grade.into(),
                curriculum,
                quantities,
            }),
        }
    }
}
