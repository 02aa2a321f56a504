use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

/// Parameters for snoozing a task.
#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnoozeParams {
    /// Number of minutes to move the task due date by. Numeric strings are accepted as well.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub snooze_minutes: Option<i64>,
}
