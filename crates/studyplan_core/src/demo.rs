//! Built-in sample plan shown until the user creates their own.
//!
//! The demo plan is never persisted and never mutated; views receive clones.

use crate::model::plan::{Exam, Plan, PlanMeta, Subject, Task, TaskPriority, TaskStatus};
use once_cell::sync::Lazy;

static DEMO_PLAN: Lazy<Plan> = Lazy::new(build_demo_plan);

/// Returns the shared read-only demo plan.
pub fn demo_plan() -> &'static Plan {
    &DEMO_PLAN
}

fn subject(id: &str, name: &str, teacher: &str, notes: &str, color: &str) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        teacher: teacher.to_string(),
        notes: notes.to_string(),
        color: color.to_string(),
    }
}

fn exam(
    id: &str,
    subject_id: &str,
    title: &str,
    datetime: &str,
    location: &str,
    notes: &str,
) -> Exam {
    Exam {
        id: id.to_string(),
        subject_id: subject_id.to_string(),
        title: title.to_string(),
        datetime: datetime.to_string(),
        location: location.to_string(),
        notes: notes.to_string(),
    }
}

fn task(
    id: &str,
    subject_id: &str,
    title: &str,
    due_date: &str,
    status: TaskStatus,
    priority: TaskPriority,
    notes: &str,
) -> Task {
    Task {
        id: id.to_string(),
        subject_id: subject_id.to_string(),
        title: title.to_string(),
        due_date: due_date.to_string(),
        status,
        priority,
        notes: notes.to_string(),
    }
}

fn build_demo_plan() -> Plan {
    use TaskPriority::{High, Low, Medium};
    use TaskStatus::{Doing, Todo};

    Plan {
        meta: PlanMeta {
            name: "Roy’s Demo Plan".to_string(),
            created_at: "2025-12-17".to_string(),
        },
        subjects: vec![
            subject(
                "sub-math",
                "Discrete Math",
                "Dr. Koval",
                "Graphs, induction, sets.",
                "#7c5cff",
            ),
            subject(
                "sub-it",
                "IT Fundamentals",
                "Mr. Petrov",
                "OSI model, IP basics, hardware.",
                "#22c55e",
            ),
            subject(
                "sub-db",
                "Databases",
                "Ms. Ivanova",
                "SQL SELECT/JOIN, normalization.",
                "#38bdf8",
            ),
            subject(
                "sub-net",
                "Networking",
                "Dr. Smirnov",
                "Subnets, routing, VLANs.",
                "#f59e0b",
            ),
            subject(
                "sub-sec",
                "Cybersecurity Basics",
                "Mr. Karim",
                "Threat models, passwords, phishing.",
                "#ef4444",
            ),
            subject(
                "sub-eng",
                "English (Academic)",
                "Ms. Sarah",
                "Presentations + technical writing.",
                "#a78bfa",
            ),
        ],
        exams: vec![
            exam(
                "ex-1",
                "sub-math",
                "Discrete Math Exam",
                "2025-12-27T10:00:00",
                "Room 101",
                "Bring student ID.",
            ),
            exam(
                "ex-2",
                "sub-db",
                "Databases Midterm",
                "2025-12-22T13:30:00",
                "Lab 3",
                "SQL + ER diagrams.",
            ),
            exam(
                "ex-3",
                "sub-net",
                "Networking Quiz",
                "2025-12-19T09:00:00",
                "Room 204",
                "Subnetting + ports.",
            ),
        ],
        tasks: vec![
            task(
                "t-1",
                "sub-it",
                "Summarize OSI layers (1 page)",
                "2025-12-18",
                Todo,
                Medium,
                "",
            ),
            task(
                "t-2",
                "sub-math",
                "Practice induction problems (10)",
                "2025-12-18",
                Doing,
                High,
                "Focus on base case clarity.",
            ),
            task(
                "t-3",
                "sub-db",
                "Write 5 JOIN queries from examples",
                "2025-12-20",
                Todo,
                High,
                "",
            ),
            task(
                "t-4",
                "sub-net",
                "Subnetting worksheet",
                "2025-12-19",
                Todo,
                High,
                "",
            ),
            task(
                "t-5",
                "sub-sec",
                "Create password policy notes",
                "2025-12-21",
                Todo,
                Medium,
                "",
            ),
            task(
                "t-6",
                "",
                "Plan study schedule for weekend",
                "2025-12-17",
                Doing,
                Low,
                "2 blocks per day.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::demo_plan;
    use crate::model::validation::{validate_subject, SubjectInput};

    #[test]
    fn demo_references_resolve() {
        let plan = demo_plan();
        for exam in &plan.exams {
            assert!(plan.subject(&exam.subject_id).is_some(), "{}", exam.id);
        }
        for task in plan.tasks.iter().filter(|task| !task.subject_id.is_empty()) {
            assert!(plan.subject(&task.subject_id).is_some(), "{}", task.id);
        }
    }

    #[test]
    fn demo_dataset_is_fixed() {
        let plan = demo_plan();
        assert_eq!(plan.meta.name, "Roy’s Demo Plan");
        assert_eq!(plan.meta.created_at, "2025-12-17");
        assert_eq!(
            (plan.subjects.len(), plan.exams.len(), plan.tasks.len()),
            (6, 3, 6)
        );
    }

    #[test]
    fn demo_subjects_are_valid() {
        for subject in &demo_plan().subjects {
            let input = SubjectInput {
                name: subject.name.clone(),
                ..SubjectInput::default()
            };
            assert!(validate_subject(&input).is_ok());
        }
    }
}
