//! Plan aggregate and entity records.
//!
//! # Invariants
//! - Wire field names are camelCase (`subjectId`, `dueDate`, `createdAt`).
//! - Removing a subject unlinks dependent exams/tasks instead of removing them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a subject, exam or task.
///
/// Kept as a string: demo records use readable ids such as `sub-math`.
pub type EntityId = String;

/// Label shown for records without a subject.
pub const NO_SUBJECT_LABEL: &str = "(No subject)";
/// Label shown for records pointing at a subject that no longer exists.
pub const UNKNOWN_SUBJECT_LABEL: &str = "(Unknown Subject)";
/// Name given to a freshly created user plan.
pub const FRESH_PLAN_NAME: &str = "My Plan";

/// Generates a new random entity id.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    #[serde(default)]
    pub name: String,
    /// Free-form timestamp; demo data uses a plain date, fresh plans RFC 3339.
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub id: EntityId,
    pub name: String,
    pub teacher: String,
    pub notes: String,
    /// CSS-style color, e.g. `#7c5cff`.
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exam {
    pub id: EntityId,
    pub subject_id: EntityId,
    pub title: String,
    /// RFC 3339 instant or local `YYYY-MM-DDTHH:MM[:SS]`.
    pub datetime: String,
    pub location: String,
    pub notes: String,
}

/// Task progress state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::Doing, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: EntityId,
    /// Optional; empty when the task is not tied to a subject.
    pub subject_id: EntityId,
    pub title: String,
    /// Calendar date `YYYY-MM-DD`.
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub notes: String,
}

/// Full set of subjects, exams and tasks for one user (or the demo).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub meta: PlanMeta,
    pub subjects: Vec<Subject>,
    pub exams: Vec<Exam>,
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Creates an empty plan with the given metadata.
    pub fn fresh(name: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            meta: PlanMeta {
                name: name.into(),
                created_at: created_at.into(),
            },
            ..Self::default()
        }
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    pub fn subject_mut(&mut self, id: &str) -> Option<&mut Subject> {
        self.subjects.iter_mut().find(|subject| subject.id == id)
    }

    pub fn exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|exam| exam.id == id)
    }

    pub fn exam_mut(&mut self, id: &str) -> Option<&mut Exam> {
        self.exams.iter_mut().find(|exam| exam.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Resolves a display name for a subject reference.
    pub fn subject_name(&self, id: &str) -> &str {
        if id.is_empty() {
            return NO_SUBJECT_LABEL;
        }
        self.subject(id)
            .map_or(UNKNOWN_SUBJECT_LABEL, |subject| subject.name.as_str())
    }

    /// Removes a subject and clears every exam/task reference to it.
    ///
    /// Returns how many exams and tasks were unlinked.
    pub fn remove_subject_and_unlink(&mut self, id: &str) -> usize {
        self.subjects.retain(|subject| subject.id != id);

        let mut unlinked = 0;
        let exam_refs = self.exams.iter_mut().map(|exam| &mut exam.subject_id);
        let task_refs = self.tasks.iter_mut().map(|task| &mut task.subject_id);
        for subject_id in exam_refs.chain(task_refs) {
            if *subject_id == id {
                subject_id.clear();
                unlinked += 1;
            }
        }
        unlinked
    }

    /// Removes an exam; returns whether anything was removed.
    pub fn remove_exam(&mut self, id: &str) -> bool {
        let before = self.exams.len();
        self.exams.retain(|exam| exam.id != id);
        self.exams.len() != before
    }

    /// Removes a task; returns whether anything was removed.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }
}
