use crate::{api::Api, scheduler::CronExt, storage::TaskStorage};
use anyhow::Context;
use croner::Cron;
use std::{sync::Arc, time::Instant};
use tokio_cron_scheduler::Job;
use tracing::{error, info, trace};

/// The job runs on a regular interval (every minute by default) to re-derive reminders for the
/// tasks that are due soon and publish them.
pub(crate) struct RemindersDeriveJob;
impl RemindersDeriveJob {
    /// Creates a new `RemindersDerive` job.
    pub fn create<S: TaskStorage>(api: Arc<Api<S>>) -> anyhow::Result<Job> {
        let job = Job::new_async(
            Cron::parse_pattern(&api.config.scheduler.reminders_derive)
                .with_context(|| {
                    format!(
                        "Cannot parse `reminders_derive` schedule: {}",
                        api.config.scheduler.reminders_derive
                    )
                })?
                .pattern
                .to_string(),
            move |_, _| {
                let api = api.clone();
                Box::pin(async move {
                    Self::execute(api).await;
                })
            },
        )?;

        Ok(job)
    }

    /// Executes a `RemindersDerive` job.
    async fn execute<S: TaskStorage>(api: Arc<Api<S>>) {
        let execute_start = Instant::now();
        match api.reminders().refresh_reminders().await {
            Ok(reminders) if !reminders.is_empty() => {
                info!(
                    "Published {} reminders ({} elapsed).",
                    reminders.len(),
                    humantime::format_duration(execute_start.elapsed())
                );
            }
            Ok(_) => {
                trace!(
                    "No tasks are due soon ({} elapsed).",
                    humantime::format_duration(execute_start.elapsed())
                );
            }
            Err(err) => {
                error!(
                    "Failed to refresh reminders ({} elapsed): {err:?}",
                    humantime::format_duration(execute_start.elapsed())
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RemindersDeriveJob;
    use crate::{
        config::{Config, SchedulerJobsConfig},
        tests::{mock_api, mock_api_with_config, mock_config, MemoryStorage},
    };
    use std::{sync::Arc, time::Duration};
    use taskminder_types::tasks::Task;
    use time::OffsetDateTime;

    #[tokio::test]
    async fn can_create_job_with_valid_schedule() -> anyhow::Result<()> {
        let api = mock_api_with_config(
            MemoryStorage::default(),
            Config {
                scheduler: SchedulerJobsConfig {
                    enabled: true,
                    reminders_derive: "1/5 * * * * *".to_string(),
                },
                ..mock_config()
            },
        );
        assert!(RemindersDeriveJob::create(Arc::new(api)).is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_create_job_with_invalid_schedule() -> anyhow::Result<()> {
        let api = mock_api_with_config(
            MemoryStorage::default(),
            Config {
                scheduler: SchedulerJobsConfig {
                    enabled: true,
                    reminders_derive: "0 0 * *".to_string(),
                },
                ..mock_config()
            },
        );

        let err = RemindersDeriveJob::create(Arc::new(api)).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Cannot parse `reminders_derive` schedule: 0 0 * *"
        );

        Ok(())
    }

    #[tokio::test]
    async fn refreshes_reminders_on_execution() -> anyhow::Result<()> {
        let now = OffsetDateTime::now_utc();
        let api = Arc::new(mock_api(MemoryStorage::with_tasks(vec![
            Task {
                id: 1,
                title: "Buy milk".to_string(),
                description: String::new(),
                due_date: now + Duration::from_secs(60),
                completed: false,
            },
            Task {
                id: 2,
                title: "Call mom".to_string(),
                description: String::new(),
                due_date: now + Duration::from_secs(3600),
                completed: false,
            },
        ])));

        RemindersDeriveJob::execute(api.clone()).await;

        let reminders = api.reminders().get_reminders();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].id, 1);
        assert_eq!(api.storage.reminders(), *reminders);

        Ok(())
    }

    #[tokio::test]
    async fn keeps_running_if_storage_fails() -> anyhow::Result<()> {
        let api = Arc::new(mock_api(MemoryStorage::default()));
        api.storage.break_storage();

        RemindersDeriveJob::execute(api.clone()).await;
        assert!(api.reminders().get_reminders().is_empty());

        Ok(())
    }
}
