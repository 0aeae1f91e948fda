use studyplan_core::{
    validate_exam, validate_subject, validate_task, ExamInput, SubjectInput, TaskInput,
    TaskPriority, TaskStatus, ValidationError,
};

fn valid_exam() -> ExamInput {
    ExamInput {
        subject_id: "sub-1".to_string(),
        title: "Midterm".to_string(),
        datetime: "2026-05-04T09:00".to_string(),
        location: "Hall B".to_string(),
        notes: String::new(),
    }
}

fn valid_task() -> TaskInput {
    TaskInput {
        title: "Read chapter 3".to_string(),
        due_date: "2026-05-01".to_string(),
        status: "doing".to_string(),
        priority: "high".to_string(),
        ..TaskInput::default()
    }
}

#[test]
fn valid_inputs_pass() {
    let subject = SubjectInput {
        name: "Physics".to_string(),
        ..SubjectInput::default()
    };
    assert_eq!(validate_subject(&subject), Ok(()));
    assert_eq!(validate_exam(&valid_exam()), Ok(()));
    assert_eq!(
        validate_task(&valid_task()),
        Ok((TaskStatus::Doing, TaskPriority::High))
    );
}

#[test]
fn blank_subject_name_is_rejected() {
    let subject = SubjectInput {
        name: "   ".to_string(),
        teacher: "Dr. Who".to_string(),
        ..SubjectInput::default()
    };
    let err = validate_subject(&subject).unwrap_err();
    assert_eq!(err, ValidationError::SubjectNameRequired);
    assert_eq!(err.to_string(), "Subject name is required.");
}

#[test]
fn exam_failures_report_specific_messages() {
    let cases = [
        (
            ExamInput {
                title: " ".to_string(),
                ..valid_exam()
            },
            "Exam title is required.",
        ),
        (
            ExamInput {
                datetime: String::new(),
                ..valid_exam()
            },
            "Valid exam date/time is required.",
        ),
        (
            ExamInput {
                datetime: "2026-13-40T99:00".to_string(),
                ..valid_exam()
            },
            "Valid exam date/time is required.",
        ),
        (
            ExamInput {
                subject_id: String::new(),
                ..valid_exam()
            },
            "Select a subject for the exam.",
        ),
    ];

    for (input, message) in cases {
        assert_eq!(validate_exam(&input).unwrap_err().to_string(), message);
    }
}

#[test]
fn exam_title_is_checked_before_datetime() {
    let input = ExamInput {
        title: String::new(),
        datetime: String::new(),
        subject_id: String::new(),
        ..valid_exam()
    };
    assert_eq!(
        validate_exam(&input).unwrap_err(),
        ValidationError::ExamTitleRequired
    );
}

#[test]
fn task_failures_report_specific_messages() {
    let cases = [
        (
            TaskInput {
                title: String::new(),
                ..valid_task()
            },
            ValidationError::TaskTitleRequired,
        ),
        (
            TaskInput {
                due_date: "2026-02-31".to_string(),
                ..valid_task()
            },
            ValidationError::TaskDueDateInvalid,
        ),
        (
            TaskInput {
                status: "blocked".to_string(),
                ..valid_task()
            },
            ValidationError::TaskStatusInvalid,
        ),
        (
            TaskInput {
                priority: "urgent".to_string(),
                ..valid_task()
            },
            ValidationError::TaskPriorityInvalid,
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(validate_task(&input).unwrap_err(), expected);
    }
    assert_eq!(ValidationError::TaskStatusInvalid.to_string(), "Invalid status.");
    assert_eq!(
        ValidationError::TaskDueDateInvalid.to_string(),
        "Valid due date is required."
    );
}

#[test]
fn task_without_subject_is_valid() {
    let input = TaskInput {
        subject_id: String::new(),
        ..valid_task()
    };
    assert!(validate_task(&input).is_ok());
}
