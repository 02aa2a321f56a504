use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Parameters for creating a task. Required properties are still optional here, so that their
/// absence is reported by the task validation rather than by the request decoding.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TaskCreateParams {
    /// Short title of the task, required.
    #[schema(min_length = 1)]
    pub title: Option<String>,
    /// Optional description of the task.
    pub description: Option<String>,
    /// Due date of the task, required. Either RFC 3339 timestamp or a local date and time
    /// (`2024-12-01T10:30`).
    pub due_date: Option<String>,
}

impl TaskCreateParams {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, due_date: D) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            due_date: Some(due_date.into()),
        }
    }

    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = Some(description.into());
        self
    }
}
