pub mod reminders_list;
pub mod status_get;
pub mod tasks_complete;
pub mod tasks_create;
pub mod tasks_list;
pub mod tasks_remove;
pub mod tasks_snooze;
pub mod tasks_update;

use crate::server::{SchedulerStatus, Status};
use taskminder_types::{
    reminders::Reminder,
    tasks::{Task, TaskCreateParams, TaskSnoozeParams, TaskUpdateParams},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskminder"),
    paths(
        status_get::status_get,
        tasks_list::tasks_list,
        tasks_create::tasks_create,
        tasks_update::tasks_update,
        tasks_remove::tasks_remove,
        tasks_complete::tasks_complete,
        tasks_snooze::tasks_snooze,
        reminders_list::reminders_list
    ),
    components(schemas(
        Reminder,
        SchedulerStatus,
        Status,
        Task,
        TaskCreateParams,
        TaskSnoozeParams,
        TaskUpdateParams
    ))
)]
pub(super) struct TaskminderOpenApi;
