use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Parameters for updating a task. Omitted properties keep their current values.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TaskUpdateParams {
    /// New title of the task.
    #[schema(min_length = 1)]
    pub title: Option<String>,
    /// New description of the task, empty string clears the description.
    pub description: Option<String>,
    /// New due date of the task.
    pub due_date: Option<String>,
}
