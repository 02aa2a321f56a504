use crate::{tasks::Task, utils::UtcTimestamp};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A projection of the incomplete task that is due soon.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Id of the task the reminder is for.
    pub id: u64,
    /// Title of the task.
    pub title: String,
    /// Description of the task.
    #[serde(default)]
    pub description: String,
    /// Date and time when the task is due.
    #[serde_as(as = "UtcTimestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub due_date: OffsetDateTime,
}

impl From<&Task> for Reminder {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
        }
    }
}
