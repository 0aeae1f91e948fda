//! Core data layer for the study planner.
//! Views and front ends render from this crate and route every edit through it.

pub mod db;
pub mod demo;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use demo::demo_plan;
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::dates::local_now;
pub use model::plan::{
    EntityId, Exam, Plan, PlanMeta, Subject, Task, TaskPriority, TaskStatus,
};
pub use model::session::{PlanMode, Screen};
pub use model::validation::{
    validate_exam, validate_subject, validate_task, ExamInput, SubjectInput, TaskInput,
    ValidationError,
};
pub use service::agenda::TaskFilter;
pub use service::plan_service::{
    AutoConfirm, Confirm, Confirmation, PlanService, PlanServiceError, PlanServiceResult,
};
pub use service::transfer::{ImportError, EXPORT_FILE_NAME};
pub use store::kv::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};
pub use store::plan_store::PlanStore;
pub use view::render_app;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
