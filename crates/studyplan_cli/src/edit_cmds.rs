//! Subject, exam and task subcommands.
//!
//! `edit` flags are optional; omitted ones keep the stored value, the way a
//! pre-filled edit form would.

use clap::{Args, Subcommand};
use studyplan_core::{
    Confirm, Confirmation, ExamInput, KeyValueStore, Plan, PlanService, PlanServiceError,
    SubjectInput, TaskInput,
};

const DEFAULT_SUBJECT_COLOR: &str = "#7c5cff";

#[derive(Subcommand)]
pub enum SubjectCommand {
    /// Add a subject
    Add(SubjectArgs),
    /// Edit a subject by id
    Edit {
        id: String,
        #[command(flatten)]
        fields: SubjectArgs,
    },
    /// Delete a subject; its exams and tasks are unlinked, not deleted
    Delete { id: String },
}

#[derive(Args)]
pub struct SubjectArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    teacher: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    /// Hex color such as #22c55e
    #[arg(long)]
    color: Option<String>,
}

#[derive(Subcommand)]
pub enum ExamCommand {
    /// Add an exam
    Add(ExamArgs),
    /// Edit an exam by id
    Edit {
        id: String,
        #[command(flatten)]
        fields: ExamArgs,
    },
    /// Delete an exam
    Delete { id: String },
}

#[derive(Args)]
pub struct ExamArgs {
    /// Subject id
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    title: Option<String>,
    /// Local `YYYY-MM-DDTHH:MM` or an RFC 3339 instant
    #[arg(long)]
    at: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a task
    Add(TaskArgs),
    /// Edit a task by id
    Edit {
        id: String,
        #[command(flatten)]
        fields: TaskArgs,
    },
    /// Delete a task
    Delete { id: String },
}

#[derive(Args)]
pub struct TaskArgs {
    /// Subject id; pass an empty string to unlink
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    title: Option<String>,
    /// `YYYY-MM-DD`
    #[arg(long)]
    due: Option<String>,
    /// todo | doing | done
    #[arg(long)]
    status: Option<String>,
    /// low | medium | high
    #[arg(long)]
    priority: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

impl SubjectArgs {
    fn apply(self, mut input: SubjectInput) -> SubjectInput {
        input.name = self.name.unwrap_or(input.name);
        input.teacher = self.teacher.unwrap_or(input.teacher);
        input.notes = self.notes.unwrap_or(input.notes);
        input.color = self.color.unwrap_or(input.color);
        input
    }
}

impl ExamArgs {
    fn apply(self, mut input: ExamInput) -> ExamInput {
        input.subject_id = self.subject.unwrap_or(input.subject_id);
        input.title = self.title.unwrap_or(input.title);
        input.datetime = self.at.unwrap_or(input.datetime);
        input.location = self.location.unwrap_or(input.location);
        input.notes = self.notes.unwrap_or(input.notes);
        input
    }
}

impl TaskArgs {
    fn apply(self, mut input: TaskInput) -> TaskInput {
        input.subject_id = self.subject.unwrap_or(input.subject_id);
        input.title = self.title.unwrap_or(input.title);
        input.due_date = self.due.unwrap_or(input.due_date);
        input.status = self.status.unwrap_or(input.status);
        input.priority = self.priority.unwrap_or(input.priority);
        input.notes = self.notes.unwrap_or(input.notes);
        input
    }
}

fn user_plan<S: KeyValueStore>(service: &PlanService<S>) -> Result<Plan, PlanServiceError> {
    service
        .store()
        .load()?
        .ok_or(PlanServiceError::NoUserPlan)
}

fn deleted(outcome: Confirmation, what: &str) -> String {
    match outcome {
        Confirmation::Accepted => format!("Deleted {what}."),
        Confirmation::Declined => "Cancelled.".to_string(),
    }
}

pub fn run_subject_command<S: KeyValueStore>(
    command: SubjectCommand,
    service: &PlanService<S>,
    confirm: &dyn Confirm,
) -> anyhow::Result<String> {
    match command {
        SubjectCommand::Add(fields) => {
            let defaults = SubjectInput {
                color: DEFAULT_SUBJECT_COLOR.to_string(),
                ..SubjectInput::default()
            };
            let id = service.add_subject(&fields.apply(defaults))?;
            Ok(format!("Added subject {id}."))
        }
        SubjectCommand::Edit { id, fields } => {
            let plan = user_plan(service)?;
            let current = plan
                .subject(&id)
                .ok_or_else(|| PlanServiceError::SubjectNotFound(id.clone()))?;
            let input = fields.apply(SubjectInput {
                name: current.name.clone(),
                teacher: current.teacher.clone(),
                notes: current.notes.clone(),
                color: current.color.clone(),
            });
            service.update_subject(&id, &input)?;
            Ok(format!("Updated subject {id}."))
        }
        SubjectCommand::Delete { id } => {
            let outcome = service.delete_subject(&id, confirm)?;
            Ok(deleted(outcome, "subject"))
        }
    }
}

pub fn run_exam_command<S: KeyValueStore>(
    command: ExamCommand,
    service: &PlanService<S>,
    confirm: &dyn Confirm,
) -> anyhow::Result<String> {
    match command {
        ExamCommand::Add(fields) => {
            let id = service.add_exam(&fields.apply(ExamInput::default()))?;
            Ok(format!("Added exam {id}."))
        }
        ExamCommand::Edit { id, fields } => {
            let plan = user_plan(service)?;
            let current = plan
                .exam(&id)
                .ok_or_else(|| PlanServiceError::ExamNotFound(id.clone()))?;
            let input = fields.apply(ExamInput {
                subject_id: current.subject_id.clone(),
                title: current.title.clone(),
                datetime: current.datetime.clone(),
                location: current.location.clone(),
                notes: current.notes.clone(),
            });
            service.update_exam(&id, &input)?;
            Ok(format!("Updated exam {id}."))
        }
        ExamCommand::Delete { id } => {
            let outcome = service.delete_exam(&id, confirm)?;
            Ok(deleted(outcome, "exam"))
        }
    }
}

pub fn run_task_command<S: KeyValueStore>(
    command: TaskCommand,
    service: &PlanService<S>,
    confirm: &dyn Confirm,
) -> anyhow::Result<String> {
    match command {
        TaskCommand::Add(fields) => {
            let id = service.add_task(&fields.apply(TaskInput::default()))?;
            Ok(format!("Added task {id}."))
        }
        TaskCommand::Edit { id, fields } => {
            let plan = user_plan(service)?;
            let current = plan
                .task(&id)
                .ok_or_else(|| PlanServiceError::TaskNotFound(id.clone()))?;
            let input = fields.apply(TaskInput {
                subject_id: current.subject_id.clone(),
                title: current.title.clone(),
                due_date: current.due_date.clone(),
                status: current.status.as_str().to_string(),
                priority: current.priority.as_str().to_string(),
                notes: current.notes.clone(),
            });
            service.update_task(&id, &input)?;
            Ok(format!("Updated task {id}."))
        }
        TaskCommand::Delete { id } => {
            let outcome = service.delete_task(&id, confirm)?;
            Ok(deleted(outcome, "task"))
        }
    }
}
