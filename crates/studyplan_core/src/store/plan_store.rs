//! Plan store over a key-value backend.
//!
//! # Responsibility
//! - Load/save the user plan as JSON under one key.
//! - Resolve the active plan mode and screen, with their fallbacks.
//!
//! # Invariants
//! - A missing, empty or unparseable plan entry reads back as `None`.
//! - Without an explicit stored mode, the mode follows plan presence.
//! - User mode without a stored plan renders the demo plan.

use super::kv::{KeyValueStore, StoreResult};
use crate::demo::demo_plan;
use crate::model::plan::Plan;
use crate::model::session::{PlanMode, Screen};
use log::{debug, warn};

pub const USER_PLAN_KEY: &str = "studyPlanner.userPlan";
pub const ACTIVE_PLAN_KEY: &str = "studyPlanner.activePlan";
pub const ACTIVE_SCREEN_KEY: &str = "studyPlanner.activeScreen";

/// Explicit replacement for ambient browser storage.
pub struct PlanStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> PlanStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Underlying backend.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Returns the persisted user plan, or `None` if absent or corrupt.
    pub fn load(&self) -> StoreResult<Option<Plan>> {
        let Some(raw) = self.kv.get(USER_PLAN_KEY)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Plan>(&raw) {
            Ok(plan) => Ok(Some(plan)),
            Err(err) => {
                warn!("event=plan_load module=store status=corrupt error={err}");
                Ok(None)
            }
        }
    }

    /// Overwrites the persisted user plan.
    pub fn save(&self, plan: &Plan) -> StoreResult<()> {
        let raw = serde_json::to_string(plan)?;
        self.kv.set(USER_PLAN_KEY, &raw)?;
        debug!(
            "event=plan_save module=store status=ok subjects={} exams={} tasks={}",
            plan.subjects.len(),
            plan.exams.len(),
            plan.tasks.len()
        );
        Ok(())
    }

    pub fn active_mode(&self) -> StoreResult<PlanMode> {
        if let Some(mode) = self.kv.get(ACTIVE_PLAN_KEY)?.as_deref().and_then(PlanMode::parse) {
            return Ok(mode);
        }
        Ok(if self.load()?.is_some() {
            PlanMode::User
        } else {
            PlanMode::Demo
        })
    }

    pub fn set_active_mode(&self, mode: PlanMode) -> StoreResult<()> {
        self.kv.set(ACTIVE_PLAN_KEY, mode.as_str())
    }

    pub fn is_demo(&self) -> StoreResult<bool> {
        Ok(self.active_mode()? == PlanMode::Demo)
    }

    /// Plan the views render from.
    pub fn active_data(&self) -> StoreResult<Plan> {
        if self.active_mode()? == PlanMode::User {
            if let Some(plan) = self.load()? {
                return Ok(plan);
            }
        }
        Ok(demo_plan().clone())
    }

    /// Stored screen, or the dashboard when unset or unknown.
    pub fn active_screen(&self) -> StoreResult<Screen> {
        Ok(self
            .kv
            .get(ACTIVE_SCREEN_KEY)?
            .as_deref()
            .and_then(Screen::parse)
            .unwrap_or_default())
    }

    pub fn set_active_screen(&self, screen: Screen) -> StoreResult<()> {
        self.kv.set(ACTIVE_SCREEN_KEY, screen.as_str())
    }
}
