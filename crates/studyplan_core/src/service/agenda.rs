//! Date-based aggregations for the dashboard, today and list screens.
//!
//! # Invariants
//! - Every function takes `now` explicitly; nothing reads the clock.
//! - Records with unparseable dates are skipped by windowed queries and
//!   sorted first by list queries.
//! - Sorts are stable, so equal keys keep plan order.
//! - Window lengths are elapsed time: the end of `[now, now + 7d]` is found
//!   on the local time zone, so a daylight-saving change inside the window
//!   moves its wall-clock end by the offset difference.

use crate::model::dates::{parse_due_date, parse_exam_datetime};
use crate::model::plan::{EntityId, Exam, Plan, Task, TaskStatus};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

pub const UPCOMING_WINDOW_DAYS: i64 = 7;
pub const TODAY_EXAM_WINDOW_HOURS: i64 = 24;

/// Exam paired with its parsed local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedExam<'a> {
    pub exam: &'a Exam,
    pub at: NaiveDateTime,
}

/// Task paired with its parsed due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedTask<'a> {
    pub task: &'a Task,
    pub due: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary<'a> {
    pub upcoming_exams: Vec<DatedExam<'a>>,
    pub upcoming_task_count: usize,
    pub overdue_tasks: Vec<DatedTask<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary<'a> {
    pub tasks_due: Vec<DatedTask<'a>>,
    pub exams_next_24h: Vec<DatedExam<'a>>,
}

/// Optional filters for the task list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub subject_id: Option<EntityId>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
            && self
                .subject_id
                .as_deref()
                .map_or(true, |subject_id| task.subject_id == subject_id)
    }
}

/// Wall-clock time in `tz` once `elapsed` has passed after `now`.
///
/// Falls back to plain wall-clock addition when `now` does not exist in `tz`.
fn advance_in<Tz: TimeZone>(tz: &Tz, now: NaiveDateTime, elapsed: Duration) -> NaiveDateTime {
    match tz.from_local_datetime(&now).earliest() {
        Some(at) => (at + elapsed).naive_local(),
        None => now + elapsed,
    }
}

fn advance(now: NaiveDateTime, elapsed: Duration) -> NaiveDateTime {
    advance_in(&Local, now, elapsed)
}

fn dated_exams(plan: &Plan) -> impl Iterator<Item = DatedExam<'_>> {
    plan.exams.iter().filter_map(|exam| {
        parse_exam_datetime(&exam.datetime).map(|at| DatedExam { exam, at })
    })
}

fn dated_tasks(plan: &Plan) -> impl Iterator<Item = DatedTask<'_>> {
    plan.tasks
        .iter()
        .filter_map(|task| parse_due_date(&task.due_date).map(|due| DatedTask { task, due }))
}

fn exams_between(plan: &Plan, from: NaiveDateTime, to: NaiveDateTime) -> Vec<DatedExam<'_>> {
    let mut exams: Vec<_> = dated_exams(plan)
        .filter(|dated| dated.at >= from && dated.at <= to)
        .collect();
    exams.sort_by_key(|dated| dated.at);
    exams
}

/// Exams in `[now, now + 7d]`, earliest first.
pub fn upcoming_exams(plan: &Plan, now: NaiveDateTime) -> Vec<DatedExam<'_>> {
    exams_between(plan, now, advance(now, Duration::days(UPCOMING_WINDOW_DAYS)))
}

/// Open tasks due between today and the calendar day seven days out.
pub fn count_upcoming_tasks(plan: &Plan, now: NaiveDateTime) -> usize {
    let first_day = now.date();
    let last_day = advance(now, Duration::days(UPCOMING_WINDOW_DAYS)).date();
    dated_tasks(plan)
        .filter(|dated| dated.task.status != TaskStatus::Done)
        .filter(|dated| dated.due >= first_day && dated.due <= last_day)
        .count()
}

/// Open tasks due strictly before today, earliest first.
pub fn overdue_tasks(plan: &Plan, now: NaiveDateTime) -> Vec<DatedTask<'_>> {
    let today = now.date();
    let mut tasks: Vec<_> = dated_tasks(plan)
        .filter(|dated| dated.task.status != TaskStatus::Done)
        .filter(|dated| dated.due < today)
        .collect();
    tasks.sort_by_key(|dated| dated.due);
    tasks
}

/// Tasks due on `now`'s calendar day regardless of status, by title.
pub fn tasks_due_today(plan: &Plan, now: NaiveDateTime) -> Vec<DatedTask<'_>> {
    let today = now.date();
    let mut tasks: Vec<_> = dated_tasks(plan).filter(|dated| dated.due == today).collect();
    tasks.sort_by(|a, b| {
        a.task
            .title
            .to_lowercase()
            .cmp(&b.task.title.to_lowercase())
            .then_with(|| a.task.title.cmp(&b.task.title))
    });
    tasks
}

/// Exams in `[now, now + 24h]`, earliest first.
pub fn exams_next_24h(plan: &Plan, now: NaiveDateTime) -> Vec<DatedExam<'_>> {
    exams_between(plan, now, advance(now, Duration::hours(TODAY_EXAM_WINDOW_HOURS)))
}

pub fn dashboard(plan: &Plan, now: NaiveDateTime) -> DashboardSummary<'_> {
    DashboardSummary {
        upcoming_exams: upcoming_exams(plan, now),
        upcoming_task_count: count_upcoming_tasks(plan, now),
        overdue_tasks: overdue_tasks(plan, now),
    }
}

pub fn today(plan: &Plan, now: NaiveDateTime) -> TodaySummary<'_> {
    TodaySummary {
        tasks_due: tasks_due_today(plan, now),
        exams_next_24h: exams_next_24h(plan, now),
    }
}

/// All exams by date-time; unparseable ones first.
pub fn exams_by_datetime(plan: &Plan) -> Vec<(&Exam, Option<NaiveDateTime>)> {
    let mut exams: Vec<_> = plan
        .exams
        .iter()
        .map(|exam| (exam, parse_exam_datetime(&exam.datetime)))
        .collect();
    exams.sort_by_key(|(_, at)| *at);
    exams
}

/// Filtered tasks by due date; unparseable ones first.
pub fn filter_tasks<'a>(plan: &'a Plan, filter: &TaskFilter) -> Vec<&'a Task> {
    let mut tasks: Vec<_> = plan
        .tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| (task, parse_due_date(&task.due_date)))
        .collect();
    tasks.sort_by_key(|(_, due)| *due);
    tasks.into_iter().map(|(task, _)| task).collect()
}
