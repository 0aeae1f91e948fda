//! Plan file export and import.
//!
//! # Invariants
//! - Export output is pretty-printed JSON of the plan shape.
//! - Import checks the top-level shape before decoding any records.

use crate::model::plan::Plan;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Suggested file name for exported plans.
pub const EXPORT_FILE_NAME: &str = "study-planner-user-plan.json";

#[derive(Debug)]
pub enum ImportError {
    /// File content is not JSON at all.
    Json(serde_json::Error),
    /// JSON lacks the `meta` object or one of the entity arrays.
    Shape,
    /// Shape is right but a record has a field of the wrong type or value.
    Record(serde_json::Error),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "Import failed: {err}"),
            Self::Shape => {
                f.write_str("Import failed: JSON does not look like a Study Planner plan.")
            }
            Self::Record(err) => write!(f, "Import failed: invalid plan record: {err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) | Self::Record(err) => Some(err),
            Self::Shape => None,
        }
    }
}

/// Serializes a plan for download.
pub fn export_plan_json(plan: &Plan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

/// `true` for an object with a `meta` object and the three entity arrays.
pub fn is_plan_shape(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("meta").is_some_and(Value::is_object)
        && ["subjects", "exams", "tasks"]
            .iter()
            .all(|key| object.get(*key).is_some_and(Value::is_array))
}

/// Parses uploaded file text into a plan.
pub fn parse_plan_import(text: &str) -> Result<Plan, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Json)?;
    if !is_plan_shape(&value) {
        return Err(ImportError::Shape);
    }
    serde_json::from_value(value).map_err(ImportError::Record)
}

#[cfg(test)]
mod tests {
    use super::{is_plan_shape, parse_plan_import, ImportError};
    use serde_json::json;

    #[test]
    fn shape_requires_meta_object_and_arrays() {
        assert!(is_plan_shape(
            &json!({"meta": {}, "subjects": [], "exams": [], "tasks": []})
        ));
        assert!(!is_plan_shape(&json!([])));
        assert!(!is_plan_shape(
            &json!({"meta": "x", "subjects": [], "exams": [], "tasks": []})
        ));
        assert!(!is_plan_shape(&json!({"meta": {}, "subjects": [], "exams": []})));
        assert!(!is_plan_shape(
            &json!({"meta": {}, "subjects": {}, "exams": [], "tasks": []})
        ));
    }

    #[test]
    fn parse_distinguishes_syntax_shape_and_record_errors() {
        assert!(matches!(
            parse_plan_import("{not json").unwrap_err(),
            ImportError::Json(_)
        ));
        assert!(matches!(
            parse_plan_import(r#"{"meta": {}}"#).unwrap_err(),
            ImportError::Shape
        ));
        let bad_status = r#"{"meta": {}, "subjects": [], "exams": [],
            "tasks": [{"id": "t", "title": "x", "dueDate": "2026-01-01", "status": "blocked"}]}"#;
        assert!(matches!(
            parse_plan_import(bad_status).unwrap_err(),
            ImportError::Record(_)
        ));
    }

    #[test]
    fn missing_record_fields_take_defaults() {
        let plan = parse_plan_import(
            r#"{"meta": {"name": "n"}, "subjects": [{"id": "s", "name": "Bio"}],
                "exams": [], "tasks": [{"id": "t", "title": "Read"}]}"#,
        )
        .unwrap();
        assert_eq!(plan.meta.created_at, "");
        assert_eq!(plan.subjects[0].color, "");
        assert_eq!(plan.tasks[0].status.as_str(), "todo");
        assert_eq!(plan.tasks[0].priority.as_str(), "medium");
    }
}
