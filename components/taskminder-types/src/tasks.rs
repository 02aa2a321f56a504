mod task;
mod task_create_params;
mod task_snooze_params;
mod task_update_params;

pub use self::{
    task::Task, task_create_params::TaskCreateParams, task_snooze_params::TaskSnoozeParams,
    task_update_params::TaskUpdateParams,
};
