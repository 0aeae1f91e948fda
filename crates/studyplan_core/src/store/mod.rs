//! Persistence for the user plan and navigation state.
//!
//! # Responsibility
//! - Abstract the key-value backend behind [`kv::KeyValueStore`].
//! - Serialize the plan to JSON and track active mode/screen.
//!
//! # Invariants
//! - Corrupt persisted plan JSON reads back as "no plan", never as an error.
//! - Only three keys are ever written.

pub mod kv;
pub mod plan_store;
