use chrono::{Duration, NaiveDate, NaiveDateTime};
use studyplan_core::service::agenda::{
    count_upcoming_tasks, dashboard, exams_by_datetime, exams_next_24h, filter_tasks,
    overdue_tasks, tasks_due_today, upcoming_exams,
};
use studyplan_core::{Exam, Plan, Task, TaskFilter, TaskStatus};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn stamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn day(offset_days: i64) -> String {
    (now() + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn exam(id: &str, datetime: String) -> Exam {
    Exam {
        id: id.to_string(),
        title: id.to_string(),
        datetime,
        ..Exam::default()
    }
}

fn task(id: &str, due_date: String, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: id.to_string(),
        due_date,
        status,
        ..Task::default()
    }
}

fn ids_of_exams(exams: &[studyplan_core::service::agenda::DatedExam<'_>]) -> Vec<String> {
    exams.iter().map(|dated| dated.exam.id.clone()).collect()
}

fn ids_of_tasks(tasks: &[studyplan_core::service::agenda::DatedTask<'_>]) -> Vec<String> {
    tasks.iter().map(|dated| dated.task.id.clone()).collect()
}

#[test]
fn upcoming_exams_cover_next_seven_days_only() {
    let mut plan = Plan::fresh("p", "");
    plan.exams.push(exam("in-10d", stamp(now() + Duration::days(10))));
    plan.exams.push(exam("in-3d", stamp(now() + Duration::days(3))));

    assert_eq!(ids_of_exams(&upcoming_exams(&plan, now())), ["in-3d"]);
}

#[test]
fn upcoming_window_is_inclusive_and_sorted() {
    let mut plan = Plan::fresh("p", "");
    plan.exams.push(exam("edge-end", stamp(now() + Duration::days(7))));
    plan.exams.push(exam("edge-start", stamp(now())));
    plan.exams.push(exam("past", stamp(now() - Duration::minutes(1))));
    plan.exams.push(exam("broken", "soon".to_string()));
    plan.exams.push(exam("mid", stamp(now() + Duration::hours(30))));

    assert_eq!(
        ids_of_exams(&upcoming_exams(&plan, now())),
        ["edge-start", "mid", "edge-end"]
    );
}

#[test]
fn overdue_tasks_exclude_done_and_today() {
    let mut plan = Plan::fresh("p", "");
    plan.tasks.push(task("two-days", day(-2), TaskStatus::Doing));
    plan.tasks.push(task("today", day(0), TaskStatus::Todo));
    plan.tasks.push(task("done-late", day(-5), TaskStatus::Done));
    plan.tasks.push(task("five-days", day(-5), TaskStatus::Todo));
    plan.tasks.push(task("no-date", String::new(), TaskStatus::Todo));

    assert_eq!(
        ids_of_tasks(&overdue_tasks(&plan, now())),
        ["five-days", "two-days"]
    );
}

#[test]
fn upcoming_task_count_uses_calendar_days() {
    let mut plan = Plan::fresh("p", "");
    plan.tasks.push(task("today", day(0), TaskStatus::Todo));
    plan.tasks.push(task("day-7", day(7), TaskStatus::Doing));
    plan.tasks.push(task("day-8", day(8), TaskStatus::Todo));
    plan.tasks.push(task("yesterday", day(-1), TaskStatus::Todo));
    plan.tasks.push(task("done", day(2), TaskStatus::Done));

    assert_eq!(count_upcoming_tasks(&plan, now()), 2);
}

#[test]
fn due_today_uses_calendar_day_equality() {
    let mut plan = Plan::fresh("p", "");
    plan.tasks.push(task("yesterday", day(-1), TaskStatus::Todo));
    plan.tasks.push(task("b-today", day(0), TaskStatus::Done));
    plan.tasks.push(task("A-today", day(0), TaskStatus::Todo));
    plan.tasks.push(task("tomorrow", day(1), TaskStatus::Todo));

    assert_eq!(
        ids_of_tasks(&tasks_due_today(&plan, now())),
        ["A-today", "b-today"]
    );
}

#[test]
fn exams_next_24h_window() {
    let mut plan = Plan::fresh("p", "");
    plan.exams.push(exam("in-25h", stamp(now() + Duration::hours(25))));
    plan.exams.push(exam("in-23h", stamp(now() + Duration::hours(23))));
    plan.exams.push(exam("in-1h", stamp(now() + Duration::hours(1))));
    plan.exams.push(exam("hour-ago", stamp(now() - Duration::hours(1))));

    assert_eq!(
        ids_of_exams(&exams_next_24h(&plan, now())),
        ["in-1h", "in-23h"]
    );
}

#[test]
fn dashboard_combines_all_counts() {
    let mut plan = Plan::fresh("p", "");
    plan.exams.push(exam("soon", stamp(now() + Duration::days(2))));
    plan.tasks.push(task("late", day(-1), TaskStatus::Todo));
    plan.tasks.push(task("next", day(3), TaskStatus::Todo));

    let summary = dashboard(&plan, now());
    assert_eq!(summary.upcoming_exams.len(), 1);
    assert_eq!(summary.upcoming_task_count, 1);
    assert_eq!(ids_of_tasks(&summary.overdue_tasks), ["late"]);
}

#[test]
fn list_orderings_put_unparseable_dates_first() {
    let mut plan = Plan::fresh("p", "");
    plan.exams.push(exam("later", stamp(now() + Duration::days(2))));
    plan.exams.push(exam("broken", "tbd".to_string()));
    plan.exams.push(exam("sooner", stamp(now())));

    let order: Vec<_> = exams_by_datetime(&plan)
        .into_iter()
        .map(|(exam, _)| exam.id.as_str())
        .collect();
    assert_eq!(order, ["broken", "sooner", "later"]);
}

#[test]
fn task_filter_by_status_and_subject() {
    let mut plan = Plan::fresh("p", "");
    let mut math_late = task("math-late", day(4), TaskStatus::Todo);
    math_late.subject_id = "math".to_string();
    let mut math_done = task("math-done", day(1), TaskStatus::Done);
    math_done.subject_id = "math".to_string();
    let mut math_soon = task("math-soon", day(1), TaskStatus::Todo);
    math_soon.subject_id = "math".to_string();
    plan.tasks.extend([math_late, math_done, math_soon]);
    plan.tasks.push(task("loose", day(0), TaskStatus::Todo));

    let all: Vec<_> = filter_tasks(&plan, &TaskFilter::default())
        .into_iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(all, ["loose", "math-done", "math-soon", "math-late"]);

    let filter = TaskFilter {
        status: Some(TaskStatus::Todo),
        subject_id: Some("math".to_string()),
    };
    let filtered: Vec<_> = filter_tasks(&plan, &filter)
        .into_iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(filtered, ["math-soon", "math-late"]);
}
