//! Plain-text screen rendering.
//!
//! # Responsibility
//! - Render each of the five screens from a plan snapshot.
//! - Render the shared header: demo banner, active mode and plan name.
//!
//! # Invariants
//! - Rendering never mutates the store.
//! - Rendering never fails on bad record data; unparseable dates are shown
//!   as stored.

use crate::model::dates::format_datetime;
use crate::model::plan::Plan;
use crate::model::session::{PlanMode, Screen};
use crate::service::agenda::{
    dashboard, exams_by_datetime, filter_tasks, today, DatedExam, DatedTask, TaskFilter,
};
use crate::store::kv::{KeyValueStore, StoreResult};
use crate::store::plan_store::PlanStore;
use chrono::NaiveDateTime;

pub const DEMO_BANNER: &str = "You are viewing the Demo Plan. Create your own plan to start.";
pub const READ_ONLY_NOTICE: &str = "Demo plan is read-only. Switch to My Plan to edit.";

/// Everything a screen needs besides the plan itself.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub now: NaiveDateTime,
    pub read_only: bool,
    pub task_filter: &'a TaskFilter,
}

/// Renders the header plus the active screen straight from the store.
pub fn render_app<S: KeyValueStore>(
    store: &PlanStore<S>,
    now: NaiveDateTime,
    task_filter: &TaskFilter,
) -> StoreResult<String> {
    let mode = store.active_mode()?;
    let plan = store.active_data()?;
    let screen = store.active_screen()?;
    let ctx = RenderContext {
        now,
        read_only: mode == PlanMode::Demo,
        task_filter,
    };

    let mut out = render_header(mode, &plan, screen);
    out.push('\n');
    out.push_str(&render_screen(screen, &plan, &ctx));
    Ok(out)
}

pub fn render_header(mode: PlanMode, plan: &Plan, screen: Screen) -> String {
    let mut out = String::new();
    if mode == PlanMode::Demo {
        out.push_str(&format!("! {DEMO_BANNER}\n"));
    }
    let name = if plan.meta.name.is_empty() {
        "-"
    } else {
        plan.meta.name.as_str()
    };
    out.push_str(&format!(
        "[{}] {} | screen: {}\n",
        mode.as_str().to_uppercase(),
        name,
        screen
    ));
    out
}

pub fn render_screen(screen: Screen, plan: &Plan, ctx: &RenderContext<'_>) -> String {
    match screen {
        Screen::Dashboard => render_dashboard(plan, ctx.now),
        Screen::Subjects => render_subjects(plan, ctx.read_only),
        Screen::Exams => render_exams(plan, ctx.read_only),
        Screen::Tasks => render_tasks(plan, ctx.read_only, ctx.task_filter),
        Screen::Today => render_today(plan, ctx.now),
    }
}

fn exam_line(plan: &Plan, dated: &DatedExam<'_>) -> String {
    let exam = dated.exam;
    format!(
        "  [Exam] {} | {} | {} | {}\n",
        exam.title,
        plan.subject_name(&exam.subject_id),
        format_datetime(dated.at),
        exam.location
    )
}

fn task_line(plan: &Plan, dated: &DatedTask<'_>) -> String {
    let task = dated.task;
    format!(
        "  [Task] {} | {} | due {} | {} | {}\n",
        task.title,
        plan.subject_name(&task.subject_id),
        task.due_date,
        task.priority.as_str(),
        task.status.as_str()
    )
}

fn read_only_notice(out: &mut String, read_only: bool) {
    if read_only {
        out.push_str(&format!("  ({READ_ONLY_NOTICE})\n"));
    }
}

pub fn render_dashboard(plan: &Plan, now: NaiveDateTime) -> String {
    let summary = dashboard(plan, now);
    let mut out = String::from("== Dashboard ==\n");
    out.push_str(&format!(
        "Next 7 days: {} exam(s), {} task(s)\n",
        summary.upcoming_exams.len(),
        summary.upcoming_task_count
    ));
    out.push_str(&format!(
        "Overdue tasks: {} task(s)\n",
        summary.overdue_tasks.len()
    ));

    out.push_str("\nUpcoming exams (next 7 days)\n");
    if summary.upcoming_exams.is_empty() {
        out.push_str("  No exams in the next 7 days.\n");
    }
    for dated in &summary.upcoming_exams {
        out.push_str(&exam_line(plan, dated));
    }

    out.push_str("\nOverdue tasks\n");
    if summary.overdue_tasks.is_empty() {
        out.push_str("  No overdue tasks.\n");
    }
    for dated in &summary.overdue_tasks {
        out.push_str(&task_line(plan, dated));
    }
    out
}

pub fn render_subjects(plan: &Plan, read_only: bool) -> String {
    let mut out = String::from("== Subjects ==\n");
    read_only_notice(&mut out, read_only);
    if plan.subjects.is_empty() {
        out.push_str("  No subjects yet.\n");
    }
    for subject in &plan.subjects {
        let color = if subject.color.is_empty() {
            "#999"
        } else {
            subject.color.as_str()
        };
        out.push_str(&format!(
            "  {} {} | {} | id={}\n",
            color, subject.name, subject.teacher, subject.id
        ));
    }
    out
}

pub fn render_exams(plan: &Plan, read_only: bool) -> String {
    let mut out = String::from("== Exams ==\n");
    read_only_notice(&mut out, read_only);
    let exams = exams_by_datetime(plan);
    if exams.is_empty() {
        out.push_str("  No exams yet.\n");
    }
    for (exam, at) in exams {
        let when = at.map_or_else(|| exam.datetime.clone(), format_datetime);
        out.push_str(&format!(
            "  {} | {} | {} | {} | id={}\n",
            exam.title,
            plan.subject_name(&exam.subject_id),
            when,
            exam.location,
            exam.id
        ));
    }
    out
}

pub fn render_tasks(plan: &Plan, read_only: bool, filter: &TaskFilter) -> String {
    let mut out = String::from("== Tasks ==\n");
    read_only_notice(&mut out, read_only);
    out.push_str(&format!(
        "  filter: status={} subject={}\n",
        filter.status.map_or("all", |status| status.as_str()),
        filter
            .subject_id
            .as_deref()
            .map_or("all", |id| plan.subject_name(id))
    ));
    let tasks = filter_tasks(plan, filter);
    if tasks.is_empty() {
        out.push_str("  No tasks match filters.\n");
    }
    for task in tasks {
        out.push_str(&format!(
            "  {} | {} | due {} | {} | {} | id={}\n",
            task.title,
            plan.subject_name(&task.subject_id),
            task.due_date,
            task.priority.as_str(),
            task.status.as_str(),
            task.id
        ));
    }
    out
}

pub fn render_today(plan: &Plan, now: NaiveDateTime) -> String {
    let summary = today(plan, now);
    let mut out = String::from("== Today ==\n");

    out.push_str("Tasks due today\n");
    if summary.tasks_due.is_empty() {
        out.push_str("  No tasks due today.\n");
    }
    for dated in &summary.tasks_due {
        out.push_str(&task_line(plan, dated));
    }

    out.push_str("\nExams in the next 24 hours\n");
    if summary.exams_next_24h.is_empty() {
        out.push_str("  No exams in the next 24 hours.\n");
    }
    for dated in &summary.exams_next_24h {
        out.push_str(&exam_line(plan, dated));
    }
    out
}
