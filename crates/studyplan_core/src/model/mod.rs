//! Planner domain model.
//!
//! # Responsibility
//! - Define the plan aggregate (subjects, exams, tasks) and its wire shape.
//! - Provide pure validators and date parsing used by every write path.
//!
//! # Invariants
//! - Every entity is identified by a string id unique within its plan.
//! - Subjects are referenced by id; an empty reference means "no subject".

pub mod dates;
pub mod plan;
pub mod session;
pub mod validation;
