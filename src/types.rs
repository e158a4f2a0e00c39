//! Common types and data structures

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status column a task belongs to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Columns in display order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Wire value, also used as the column identifier
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-assigned task identifier. The backend may hand out numbers or strings;
/// whichever it uses is echoed back unchanged, including non-integer or
/// out-of-`i64` numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Number(n.into())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// Task record as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: TaskStatus,
    /// Fields the board does not use (timestamps, version keys, ...).
    /// Kept so a status update sends the record back whole.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Task {
    /// Copy of this task moved to another column
    pub fn with_status(&self, status: TaskStatus) -> Task {
        Task {
            status,
            ..self.clone()
        }
    }
}

/// Creation body for `POST /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("todo"), TaskStatus::Todo)]
    #[case(json!("inprogress"), TaskStatus::InProgress)]
    #[case(json!("done"), TaskStatus::Done)]
    fn status_uses_wire_names(#[case] raw: serde_json::Value, #[case] expected: TaskStatus) {
        let status: TaskStatus = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(status, expected);
        assert_eq!(serde_json::to_value(status).unwrap(), raw);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_value::<TaskStatus>(json!("blocked"));
        assert!(result.is_err());
    }

    #[rstest]
    #[case(json!(7), TaskId::from(7))]
    #[case(json!("65f1c0a2"), TaskId::Text("65f1c0a2".into()))]
    fn id_keeps_its_json_shape(#[case] raw: serde_json::Value, #[case] expected: TaskId) {
        let id: TaskId = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(id, expected);
        assert_eq!(serde_json::to_value(&id).unwrap(), raw);
    }

    #[rstest]
    #[case(json!(1.5), "1.5")]
    #[case(json!(u64::MAX), "18446744073709551615")]
    #[case(json!(-3), "-3")]
    fn numeric_ids_outside_i64_round_trip(#[case] raw: serde_json::Value, #[case] shown: &str) {
        let task: Task = serde_json::from_value(
            json!({"id": raw.clone(), "title": "t", "status": "todo"}),
        )
        .unwrap();
        assert_eq!(task.id.to_string(), shown);
        assert_eq!(serde_json::to_value(&task).unwrap()["id"], raw);
    }

    #[test]
    fn unknown_fields_survive_a_status_change() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "t",
            "description": "",
            "status": "todo",
            "createdAt": "2024-01-01",
            "priority": 2
        }))
        .unwrap();
        let body = serde_json::to_value(task.with_status(TaskStatus::Done)).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 7,
                "title": "t",
                "description": "",
                "status": "done",
                "createdAt": "2024-01-01",
                "priority": 2
            })
        );
    }

    #[test]
    fn missing_or_null_description_reads_as_empty() {
        let missing: Task =
            serde_json::from_value(json!({"id": 1, "title": "a", "status": "done"})).unwrap();
        let null: Task = serde_json::from_value(
            json!({"id": 2, "title": "b", "description": null, "status": "done"}),
        )
        .unwrap();
        assert_eq!(missing.description, "");
        assert_eq!(null.description, "");
    }

    #[test]
    fn with_status_only_changes_status() {
        let task = Task {
            id: TaskId::from(3),
            title: "Write docs".into(),
            description: "README".into(),
            status: TaskStatus::Todo,
            extra: serde_json::Map::new(),
        };
        let moved = task.with_status(TaskStatus::Done);
        assert_eq!(moved.id, task.id);
        assert_eq!(moved.title, task.title);
        assert_eq!(moved.description, task.description);
        assert_eq!(moved.status, TaskStatus::Done);
        assert_eq!(moved.extra, task.extra);
    }
}
