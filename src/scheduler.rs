mod scheduler_jobs;

use crate::{
    api::Api,
    scheduler::scheduler_jobs::RemindersDeriveJob,
    server::SchedulerStatus,
    storage::{FileStorage, TaskStorage},
};
use croner::Cron;
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;
use tracing::{debug, warn};

/// Parses cron patterns the same way the scheduler does (seconds are required).
pub trait CronExt {
    fn parse_pattern(pattern: &str) -> anyhow::Result<Cron>;
}

impl CronExt for Cron {
    fn parse_pattern(pattern: &str) -> anyhow::Result<Cron> {
        Ok(Cron::new(pattern)
            .with_seconds_required()
            .with_dom_and_dow()
            .parse()?)
    }
}

/// Defines a scheduler that runs the background jobs.
pub struct Scheduler<S: TaskStorage = FileStorage> {
    pub inner_scheduler: JobScheduler,
    pub api: Arc<Api<S>>,
    /// Indicates whether the scheduler has been started.
    pub started: bool,
}

impl<S: TaskStorage> Scheduler<S> {
    /// Creates the scheduler, registers all jobs and starts it, unless it's disabled in config.
    pub async fn start(api: Arc<Api<S>>) -> anyhow::Result<Self> {
        let mut scheduler = Self {
            inner_scheduler: JobScheduler::new().await?,
            api,
            started: false,
        };

        if !scheduler.api.config.scheduler.enabled {
            warn!("Scheduler is disabled, reminders won't be refreshed.");
            return Ok(scheduler);
        }

        let job_id = scheduler
            .inner_scheduler
            .add(RemindersDeriveJob::create(scheduler.api.clone())?)
            .await?;
        debug!(job.id = %job_id, "Scheduled reminders derive job.");

        scheduler.inner_scheduler.start().await?;
        scheduler.started = true;

        Ok(scheduler)
    }

    /// Returns the status of the scheduler.
    pub async fn status(&mut self) -> anyhow::Result<SchedulerStatus> {
        if !self.started {
            return Ok(SchedulerStatus {
                operational: false,
                time_till_next_job: None,
            });
        }

        Ok(SchedulerStatus {
            operational: true,
            time_till_next_job: self.inner_scheduler.time_till_next_job().await?,
        })
    }
}
