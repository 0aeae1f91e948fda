//! Core use-case services.
//!
//! # Responsibility
//! - Apply validated edits to the user plan through the plan store.
//! - Compute dashboard/today aggregations and list orderings.
//! - Convert plans to and from their JSON file form.

pub mod agenda;
pub mod plan_service;
pub mod transfer;
