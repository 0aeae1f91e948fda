//! Form-input validators for subjects, exams and tasks.
//!
//! # Invariants
//! - Validators are pure: no storage access, no clock access.
//! - Checks run in a fixed order and the first failure is reported.
//! - Messages are user-facing and stable.

use super::dates::{parse_due_date, parse_exam_datetime};
use super::plan::{EntityId, TaskPriority, TaskStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// First failed check for a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    SubjectNameRequired,
    ExamTitleRequired,
    ExamDateTimeInvalid,
    ExamSubjectRequired,
    TaskTitleRequired,
    TaskDueDateInvalid,
    TaskStatusInvalid,
    TaskPriorityInvalid,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            Self::SubjectNameRequired => "Subject name is required.",
            Self::ExamTitleRequired => "Exam title is required.",
            Self::ExamDateTimeInvalid => "Valid exam date/time is required.",
            Self::ExamSubjectRequired => "Select a subject for the exam.",
            Self::TaskTitleRequired => "Task title is required.",
            Self::TaskDueDateInvalid => "Valid due date is required.",
            Self::TaskStatusInvalid => "Invalid status.",
            Self::TaskPriorityInvalid => "Invalid priority.",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Raw subject form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectInput {
    pub name: String,
    pub teacher: String,
    pub notes: String,
    pub color: String,
}

/// Raw exam form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamInput {
    pub subject_id: EntityId,
    pub title: String,
    pub datetime: String,
    pub location: String,
    pub notes: String,
}

/// Raw task form values. Status and priority arrive as strings from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub subject_id: EntityId,
    pub title: String,
    pub due_date: String,
    pub status: String,
    pub priority: String,
    pub notes: String,
}

impl Default for TaskInput {
    fn default() -> Self {
        Self {
            subject_id: EntityId::new(),
            title: String::new(),
            due_date: String::new(),
            status: TaskStatus::default().as_str().to_string(),
            priority: TaskPriority::default().as_str().to_string(),
            notes: String::new(),
        }
    }
}

pub fn validate_subject(input: &SubjectInput) -> ValidationResult<()> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::SubjectNameRequired);
    }
    Ok(())
}

pub fn validate_exam(input: &ExamInput) -> ValidationResult<()> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::ExamTitleRequired);
    }
    if parse_exam_datetime(&input.datetime).is_none() {
        return Err(ValidationError::ExamDateTimeInvalid);
    }
    if input.subject_id.is_empty() {
        return Err(ValidationError::ExamSubjectRequired);
    }
    Ok(())
}

/// Validates a task form and returns its parsed status and priority.
pub fn validate_task(input: &TaskInput) -> ValidationResult<(TaskStatus, TaskPriority)> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::TaskTitleRequired);
    }
    if parse_due_date(&input.due_date).is_none() {
        return Err(ValidationError::TaskDueDateInvalid);
    }
    let status = TaskStatus::parse(&input.status).ok_or(ValidationError::TaskStatusInvalid)?;
    let priority =
        TaskPriority::parse(&input.priority).ok_or(ValidationError::TaskPriorityInvalid)?;
    Ok((status, priority))
}
