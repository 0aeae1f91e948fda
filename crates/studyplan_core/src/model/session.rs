//! Persisted navigation state: which plan is shown and on which screen.

use std::fmt::{Display, Formatter};

/// Which plan the views render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Built-in read-only sample plan.
    Demo,
    /// The persisted, editable plan.
    User,
}

impl PlanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "demo" => Some(Self::Demo),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl Display for PlanMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    Subjects,
    Exams,
    Tasks,
    Today,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Self::Dashboard,
        Self::Subjects,
        Self::Exams,
        Self::Tasks,
        Self::Today,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Subjects => "subjects",
            Self::Exams => "exams",
            Self::Tasks => "tasks",
            Self::Today => "today",
        }
    }

    /// Returns `None` for names outside the five known screens.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.as_str() == value)
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
