//! User plan editing use-cases.
//!
//! # Responsibility
//! - Apply validated subject/exam/task edits to the persisted user plan.
//! - Gate destructive actions behind an injected confirmation callback.
//! - Switch plan modes, reset the plan, and import/export it.
//!
//! # Invariants
//! - Every edit loads a fresh copy, mutates it, and saves it once; any
//!   failure or declined confirmation leaves the store untouched.
//! - The demo plan is never written; edits while it is active fail with
//!   `DemoReadOnly`.
//! - Edits without a stored user plan fail with `NoUserPlan`.

use crate::model::dates::utc_timestamp;
use crate::model::plan::{new_entity_id, EntityId, Exam, Plan, Subject, Task, FRESH_PLAN_NAME};
use crate::model::session::PlanMode;
use crate::model::validation::{
    validate_exam, validate_subject, validate_task, ExamInput, SubjectInput, TaskInput,
    ValidationError,
};
use crate::service::transfer::{export_plan_json, parse_plan_import, ImportError};
use crate::store::kv::{KeyValueStore, StoreError};
use crate::store::plan_store::PlanStore;
use crate::view::READ_ONLY_NOTICE;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const RESET_PROMPT: &str = "This will reset your current User Plan. Continue?";
pub const IMPORT_PROMPT: &str = "Import will REPLACE your current User Plan. Continue?";

pub type PlanServiceResult<T> = Result<T, PlanServiceError>;

/// Yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers every prompt with a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Outcome of an action that asked for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Debug)]
pub enum PlanServiceError {
    /// No user plan is stored yet.
    NoUserPlan,
    /// The demo plan is active.
    DemoReadOnly,
    /// Exams need at least one subject to attach to.
    NoSubjects,
    /// A submitted `subject_id` does not exist in the plan.
    UnknownSubject(EntityId),
    SubjectNotFound(EntityId),
    ExamNotFound(EntityId),
    TaskNotFound(EntityId),
    Validation(ValidationError),
    Import(ImportError),
    Store(StoreError),
    Io(std::io::Error),
}

impl Display for PlanServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUserPlan => f.write_str("No User Plan found. Click Create New Plan first."),
            Self::DemoReadOnly => f.write_str(READ_ONLY_NOTICE),
            Self::NoSubjects => {
                f.write_str("You must add at least 1 subject before creating an exam.")
            }
            Self::UnknownSubject(id) => write!(f, "Selected subject does not exist: {id}"),
            Self::SubjectNotFound(_) => f.write_str("Subject not found."),
            Self::ExamNotFound(_) => f.write_str("Exam not found."),
            Self::TaskNotFound(_) => f.write_str("Task not found."),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Import(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlanServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Import(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for PlanServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImportError> for PlanServiceError {
    fn from(value: ImportError) -> Self {
        Self::Import(value)
    }
}

impl From<StoreError> for PlanServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for PlanServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Store(StoreError::Serialize(value))
    }
}

impl From<std::io::Error> for PlanServiceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Use-case facade over a plan store.
pub struct PlanService<S: KeyValueStore> {
    store: PlanStore<S>,
}

impl<S: KeyValueStore> PlanService<S> {
    pub fn new(store: PlanStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PlanStore<S> {
        &self.store
    }

    fn require_user_plan(&self) -> PlanServiceResult<Plan> {
        self.store.load()?.ok_or(PlanServiceError::NoUserPlan)
    }

    /// The user plan, provided it is the one on screen.
    fn editable_plan(&self) -> PlanServiceResult<Plan> {
        let plan = self.require_user_plan()?;
        if self.store.is_demo()? {
            return Err(PlanServiceError::DemoReadOnly);
        }
        Ok(plan)
    }

    /// Replaces the user plan with an empty "My Plan" and switches to it.
    pub fn create_fresh_plan(&self, confirm: &dyn Confirm) -> PlanServiceResult<Confirmation> {
        if !confirm.confirm(RESET_PROMPT) {
            return Ok(Confirmation::Declined);
        }
        self.store
            .save(&Plan::fresh(FRESH_PLAN_NAME, utc_timestamp()))?;
        self.store.set_active_mode(PlanMode::User)?;
        info!("event=plan_reset module=service status=ok");
        Ok(Confirmation::Accepted)
    }

    pub fn view_demo(&self) -> PlanServiceResult<PlanMode> {
        self.store.set_active_mode(PlanMode::Demo)?;
        Ok(PlanMode::Demo)
    }

    /// Switches to the user plan, or stays on the demo when none exists.
    pub fn view_my_plan(&self) -> PlanServiceResult<PlanMode> {
        let mode = if self.store.load()?.is_some() {
            PlanMode::User
        } else {
            PlanMode::Demo
        };
        self.store.set_active_mode(mode)?;
        Ok(mode)
    }

    pub fn add_subject(&self, input: &SubjectInput) -> PlanServiceResult<EntityId> {
        let mut plan = self.editable_plan()?;
        validate_subject(input)?;

        let id = new_entity_id();
        plan.subjects.push(Subject {
            id: id.clone(),
            name: input.name.trim().to_string(),
            teacher: input.teacher.trim().to_string(),
            notes: input.notes.trim().to_string(),
            color: input.color.clone(),
        });
        self.store.save(&plan)?;
        info!("event=subject_add module=service status=ok id={id}");
        Ok(id)
    }

    pub fn update_subject(&self, id: &str, input: &SubjectInput) -> PlanServiceResult<()> {
        let mut plan = self.editable_plan()?;
        validate_subject(input)?;

        let subject = plan
            .subject_mut(id)
            .ok_or_else(|| PlanServiceError::SubjectNotFound(id.to_string()))?;
        subject.name = input.name.trim().to_string();
        subject.teacher = input.teacher.trim().to_string();
        subject.notes = input.notes.trim().to_string();
        subject.color = input.color.clone();
        self.store.save(&plan)?;
        info!("event=subject_update module=service status=ok id={id}");
        Ok(())
    }

    /// Removes a subject and unlinks its exams and tasks.
    pub fn delete_subject(
        &self,
        id: &str,
        confirm: &dyn Confirm,
    ) -> PlanServiceResult<Confirmation> {
        let mut plan = self.editable_plan()?;
        let name = plan
            .subject(id)
            .map(|subject| subject.name.clone())
            .ok_or_else(|| PlanServiceError::SubjectNotFound(id.to_string()))?;

        let prompt = format!("Delete \"{name}\"? This will unlink related exams/tasks.");
        if !confirm.confirm(&prompt) {
            return Ok(Confirmation::Declined);
        }
        let unlinked = plan.remove_subject_and_unlink(id);
        self.store.save(&plan)?;
        info!("event=subject_delete module=service status=ok id={id} unlinked={unlinked}");
        Ok(Confirmation::Accepted)
    }

    fn check_exam_input(plan: &Plan, input: &ExamInput) -> PlanServiceResult<()> {
        if plan.subjects.is_empty() {
            return Err(PlanServiceError::NoSubjects);
        }
        validate_exam(input)?;
        if plan.subject(&input.subject_id).is_none() {
            return Err(PlanServiceError::UnknownSubject(input.subject_id.clone()));
        }
        Ok(())
    }

    pub fn add_exam(&self, input: &ExamInput) -> PlanServiceResult<EntityId> {
        let mut plan = self.editable_plan()?;
        Self::check_exam_input(&plan, input)?;

        let id = new_entity_id();
        plan.exams.push(exam_from_input(id.clone(), input));
        self.store.save(&plan)?;
        info!("event=exam_add module=service status=ok id={id}");
        Ok(id)
    }

    pub fn update_exam(&self, id: &str, input: &ExamInput) -> PlanServiceResult<()> {
        let mut plan = self.editable_plan()?;
        Self::check_exam_input(&plan, input)?;

        let exam = plan
            .exam_mut(id)
            .ok_or_else(|| PlanServiceError::ExamNotFound(id.to_string()))?;
        *exam = exam_from_input(exam.id.clone(), input);
        self.store.save(&plan)?;
        info!("event=exam_update module=service status=ok id={id}");
        Ok(())
    }

    pub fn delete_exam(&self, id: &str, confirm: &dyn Confirm) -> PlanServiceResult<Confirmation> {
        let mut plan = self.editable_plan()?;
        let title = plan
            .exam(id)
            .map(|exam| exam.title.clone())
            .ok_or_else(|| PlanServiceError::ExamNotFound(id.to_string()))?;

        if !confirm.confirm(&format!("Delete \"{title}\"?")) {
            return Ok(Confirmation::Declined);
        }
        plan.remove_exam(id);
        self.store.save(&plan)?;
        info!("event=exam_delete module=service status=ok id={id}");
        Ok(Confirmation::Accepted)
    }

    fn check_task_input(plan: &Plan, input: &TaskInput) -> PlanServiceResult<Task> {
        let (status, priority) = validate_task(input)?;
        if !input.subject_id.is_empty() && plan.subject(&input.subject_id).is_none() {
            return Err(PlanServiceError::UnknownSubject(input.subject_id.clone()));
        }
        Ok(Task {
            id: EntityId::new(),
            subject_id: input.subject_id.clone(),
            title: input.title.trim().to_string(),
            due_date: input.due_date.trim().to_string(),
            status,
            priority,
            notes: input.notes.trim().to_string(),
        })
    }

    pub fn add_task(&self, input: &TaskInput) -> PlanServiceResult<EntityId> {
        let mut plan = self.editable_plan()?;
        let mut task = Self::check_task_input(&plan, input)?;

        let id = new_entity_id();
        task.id = id.clone();
        plan.tasks.push(task);
        self.store.save(&plan)?;
        info!("event=task_add module=service status=ok id={id}");
        Ok(id)
    }

    pub fn update_task(&self, id: &str, input: &TaskInput) -> PlanServiceResult<()> {
        let mut plan = self.editable_plan()?;
        let mut updated = Self::check_task_input(&plan, input)?;

        let task = plan
            .task_mut(id)
            .ok_or_else(|| PlanServiceError::TaskNotFound(id.to_string()))?;
        updated.id = task.id.clone();
        *task = updated;
        self.store.save(&plan)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(())
    }

    pub fn delete_task(&self, id: &str, confirm: &dyn Confirm) -> PlanServiceResult<Confirmation> {
        let mut plan = self.editable_plan()?;
        let title = plan
            .task(id)
            .map(|task| task.title.clone())
            .ok_or_else(|| PlanServiceError::TaskNotFound(id.to_string()))?;

        if !confirm.confirm(&format!("Delete \"{title}\"?")) {
            return Ok(Confirmation::Declined);
        }
        plan.remove_task(id);
        self.store.save(&plan)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(Confirmation::Accepted)
    }

    /// Pretty JSON of the stored user plan.
    pub fn export_user_plan(&self) -> PlanServiceResult<String> {
        let plan = self.require_user_plan()?;
        Ok(export_plan_json(&plan)?)
    }

    /// Writes the stored user plan to `path`.
    pub fn export_user_plan_to(&self, path: &Path) -> PlanServiceResult<()> {
        let json = self.export_user_plan()?;
        std::fs::write(path, json)?;
        info!(
            "event=plan_export module=service status=ok path={}",
            path.display()
        );
        Ok(())
    }

    /// Replaces the user plan with the parsed file content and switches to it.
    ///
    /// The prompt is only shown once the text passed shape validation.
    pub fn import_user_plan(
        &self,
        text: &str,
        confirm: &dyn Confirm,
    ) -> PlanServiceResult<Confirmation> {
        let plan = parse_plan_import(text)?;
        if !confirm.confirm(IMPORT_PROMPT) {
            return Ok(Confirmation::Declined);
        }
        self.store.save(&plan)?;
        self.store.set_active_mode(PlanMode::User)?;
        info!(
            "event=plan_import module=service status=ok subjects={} exams={} tasks={}",
            plan.subjects.len(),
            plan.exams.len(),
            plan.tasks.len()
        );
        Ok(Confirmation::Accepted)
    }

    /// Reads `path` and imports it.
    pub fn import_user_plan_from(
        &self,
        path: &Path,
        confirm: &dyn Confirm,
    ) -> PlanServiceResult<Confirmation> {
        let text = std::fs::read_to_string(path)?;
        self.import_user_plan(&text, confirm)
    }
}

fn exam_from_input(id: EntityId, input: &ExamInput) -> Exam {
    Exam {
        id,
        subject_id: input.subject_id.clone(),
        title: input.title.trim().to_string(),
        datetime: input.datetime.trim().to_string(),
        location: input.location.trim().to_string(),
        notes: input.notes.trim().to_string(),
    }
}
