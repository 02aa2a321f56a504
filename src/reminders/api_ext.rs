use crate::{api::Api, storage::TaskStorage};
use std::sync::Arc;
use taskminder_types::reminders::Reminder;
use time::{Duration, OffsetDateTime};
use tracing::debug;

pub struct RemindersApiExt<'a, S: TaskStorage> {
    api: &'a Api<S>,
}

impl<'a, S: TaskStorage> RemindersApiExt<'a, S> {
    /// Creates Reminders API.
    pub fn new(api: &'a Api<S>) -> Self {
        Self { api }
    }

    /// Returns the latest published reminders.
    pub fn get_reminders(&self) -> Arc<Vec<Reminder>> {
        self.api.reminders.load_full()
    }

    /// Selects incomplete tasks that are due before `now` plus configured horizon, including the
    /// ones that are already overdue. A horizon that reaches past the last representable moment
    /// selects all incomplete tasks.
    pub async fn derive_reminders(&self, now: OffsetDateTime) -> anyhow::Result<Vec<Reminder>> {
        let horizon = Duration::try_from(self.api.config.reminders.horizon)
            .ok()
            .and_then(|horizon| now.checked_add(horizon));
        Ok(self
            .api
            .storage
            .load_tasks()
            .await?
            .iter()
            .filter(|task| {
                !task.completed && horizon.map_or(true, |horizon| task.due_date <= horizon)
            })
            .map(Reminder::from)
            .collect())
    }

    /// Derives reminders for the current moment and replaces previously published ones.
    pub async fn refresh_reminders(&self) -> anyhow::Result<Arc<Vec<Reminder>>> {
        let reminders = Arc::new(self.derive_reminders(OffsetDateTime::now_utc()).await?);
        self.api.reminders.store(reminders.clone());
        self.api.storage.save_reminders(&reminders).await?;

        Ok(reminders)
    }

    /// Publishes the reminders persisted by the previous run, if any.
    pub async fn restore_reminders(&self) -> anyhow::Result<()> {
        let reminders = self.api.storage.load_reminders().await?;
        debug!("Restored {} reminders.", reminders.len());
        self.api.reminders.store(Arc::new(reminders));

        Ok(())
    }
}

impl<S: TaskStorage> Api<S> {
    /// Returns an API to work with reminders.
    pub fn reminders(&self) -> RemindersApiExt<'_, S> {
        RemindersApiExt::new(self)
    }
}
