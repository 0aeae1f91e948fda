use studyplan_core::service::transfer::{export_plan_json, parse_plan_import};
use studyplan_core::{
    demo_plan, AutoConfirm, Confirmation, ImportError, MemoryKvStore, PlanMode, PlanService,
    PlanServiceError, PlanStore, SubjectInput, TaskInput, EXPORT_FILE_NAME,
};

fn populated_service() -> PlanService<MemoryKvStore> {
    let service = PlanService::new(PlanStore::new(MemoryKvStore::new()));
    service.create_fresh_plan(&AutoConfirm(true)).unwrap();
    let subject_id = service
        .add_subject(&SubjectInput {
            name: "Statistics".to_string(),
            teacher: "Ms. Ito".to_string(),
            notes: "Bring calculator".to_string(),
            color: "#38bdf8".to_string(),
        })
        .unwrap();
    service
        .add_task(&TaskInput {
            subject_id,
            title: "Problem set 4".to_string(),
            due_date: "2026-04-02".to_string(),
            status: "doing".to_string(),
            priority: "high".to_string(),
            notes: "Questions 1-12".to_string(),
        })
        .unwrap();
    service
}

#[test]
fn export_then_import_is_identity() {
    let source = populated_service();
    let exported = source.export_user_plan().unwrap();
    let saved = source.store().load().unwrap().unwrap();

    let target = PlanService::new(PlanStore::new(MemoryKvStore::new()));
    assert_eq!(
        target
            .import_user_plan(&exported, &AutoConfirm(true))
            .unwrap(),
        Confirmation::Accepted
    );
    assert_eq!(target.store().load().unwrap(), Some(saved));
    assert_eq!(target.store().active_mode().unwrap(), PlanMode::User);
}

#[test]
fn demo_plan_survives_json_roundtrip() {
    let json = export_plan_json(demo_plan()).unwrap();
    assert_eq!(&parse_plan_import(&json).unwrap(), demo_plan());
}

#[test]
fn export_uses_camel_case_wire_names() {
    let service = populated_service();
    let exported = service.export_user_plan().unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();

    assert_eq!(value["meta"]["name"], "My Plan");
    assert!(value["meta"]["createdAt"].is_string());
    assert_eq!(value["tasks"][0]["dueDate"], "2026-04-02");
    assert_eq!(value["tasks"][0]["status"], "doing");
    assert!(value["tasks"][0]["subjectId"].is_string());
    assert!(exported.contains('\n'), "export should be pretty-printed");
}

#[test]
fn declined_import_keeps_existing_plan() {
    let service = populated_service();
    let before = service.store().load().unwrap();
    let incoming = r#"{"meta": {"name": "Other"}, "subjects": [], "exams": [], "tasks": []}"#;

    assert_eq!(
        service
            .import_user_plan(incoming, &AutoConfirm(false))
            .unwrap(),
        Confirmation::Declined
    );
    assert_eq!(service.store().load().unwrap(), before);
}

#[test]
fn malformed_import_never_prompts() {
    let service = populated_service();
    let never = |_: &str| -> bool { panic!("prompt shown for invalid import") };

    let err = service.import_user_plan("[1, 2, 3]", &never).unwrap_err();
    assert!(matches!(err, PlanServiceError::Import(ImportError::Shape)));
    assert_eq!(
        err.to_string(),
        "Import failed: JSON does not look like a Study Planner plan."
    );

    let err = service.import_user_plan("{{{", &never).unwrap_err();
    assert!(matches!(err, PlanServiceError::Import(ImportError::Json(_))));
}

#[test]
fn file_export_and_import_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    let source = populated_service();
    source.export_user_plan_to(&path).unwrap();

    let target = PlanService::new(PlanStore::new(MemoryKvStore::new()));
    target
        .import_user_plan_from(&path, &AutoConfirm(true))
        .unwrap();
    assert_eq!(
        target.store().load().unwrap(),
        source.store().load().unwrap()
    );
}

#[test]
fn missing_import_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = PlanService::new(PlanStore::new(MemoryKvStore::new()));
    let err = service
        .import_user_plan_from(&dir.path().join("absent.json"), &AutoConfirm(true))
        .unwrap_err();
    assert!(matches!(err, PlanServiceError::Io(_)));
}
