mod raw_config;
mod reminders_config;
mod scheduler_jobs_config;
mod store_config;
mod tasks_config;

pub use self::{
    raw_config::RawConfig, reminders_config::RemindersConfig,
    scheduler_jobs_config::SchedulerJobsConfig, store_config::StoreConfig,
    tasks_config::TasksConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration for the files the tasks and reminders are persisted to.
    pub store: StoreConfig,
    /// Configuration for the scheduler jobs.
    pub scheduler: SchedulerJobsConfig,
    /// Configuration for the reminders.
    pub reminders: RemindersConfig,
    /// Configuration for the tasks.
    pub tasks: TasksConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            store: raw_config.store,
            scheduler: raw_config.scheduler,
            reminders: raw_config.reminders,
            tasks: raw_config.tasks,
        }
    }
}
