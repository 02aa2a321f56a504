use serde::Serialize;
use serde_with::{serde_as, skip_serializing_none, DurationMilliSeconds};
use std::time::Duration;
use utoipa::ToSchema;

/// State of the background job that refreshes reminders, as reported by `/api/status`. When the
/// scheduler is disabled in config, it's reported as not operational and without the next run.
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStatus {
    /// Whether the reminders refresh job has been scheduled and the scheduler is running.
    pub operational: bool,
    /// Time left until the next reminders refresh, omitted if nothing is scheduled.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    #[schema(value_type = Option<u64>)]
    pub time_till_next_job: Option<Duration>,
}
