use crate::server::SchedulerStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Server status.
#[derive(Clone, Serialize, ToSchema)]
pub struct Status {
    /// Version of the server.
    pub version: String,
    /// Status of the scheduler that refreshes reminders.
    pub scheduler: SchedulerStatus,
}
