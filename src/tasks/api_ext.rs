use crate::{
    api::Api, error::Error as TaskminderError, storage::TaskStorage,
    tasks::due_date::normalize_due_date,
};
use anyhow::{anyhow, bail};
use taskminder_types::tasks::{Task, TaskCreateParams, TaskSnoozeParams, TaskUpdateParams};
use time::{Duration, OffsetDateTime};
use tracing::debug;

pub struct TasksApiExt<'a, S: TaskStorage> {
    api: &'a Api<S>,
}

impl<'a, S: TaskStorage> TasksApiExt<'a, S> {
    /// Creates Tasks API.
    pub fn new(api: &'a Api<S>) -> Self {
        Self { api }
    }

    /// Returns all tasks in the order they were stored.
    pub async fn get_tasks(&self) -> anyhow::Result<Vec<Task>> {
        self.api.storage.load_tasks().await
    }

    /// Creates a new task.
    pub async fn create_task(&self, params: TaskCreateParams) -> anyhow::Result<Task> {
        let (Some(title), Some(due_date)) = (
            params.title.filter(|title| !title.trim().is_empty()),
            params.due_date.filter(|due_date| !due_date.trim().is_empty()),
        ) else {
            bail!(TaskminderError::client(
                "Task title and due date are required."
            ));
        };
        let due_date = self.normalize_due_date(&due_date)?;

        let mut tasks = self.api.storage.load_tasks().await?;
        let task = Task {
            id: tasks.iter().map(|task| task.id).max().unwrap_or_default() + 1,
            title,
            description: params.description.unwrap_or_default(),
            due_date,
            completed: false,
        };

        tasks.push(task.clone());
        self.api.storage.save_tasks(&tasks).await?;

        debug!(task.id = task.id, "Created task.");
        Ok(task)
    }

    /// Updates existing task. Properties that aren't specified keep their current values.
    pub async fn update_task(&self, id: u64, params: TaskUpdateParams) -> anyhow::Result<Task> {
        if params.title.is_none() && params.description.is_none() && params.due_date.is_none() {
            bail!(TaskminderError::client(format!(
                "At least one task property should be provided ({id})."
            )));
        }

        if params
            .title
            .as_ref()
            .is_some_and(|title| title.trim().is_empty())
        {
            bail!(TaskminderError::client("Task title cannot be empty."));
        }

        let due_date = params
            .due_date
            .as_deref()
            .map(|due_date| self.normalize_due_date(due_date))
            .transpose()?;

        self.modify_task(id, |task| {
            if let Some(title) = params.title {
                task.title = title;
            }
            if let Some(description) = params.description {
                task.description = description;
            }
            if let Some(due_date) = due_date {
                task.due_date = due_date;
            }
            Ok(())
        })
        .await
        .inspect(|task| debug!(task.id = task.id, "Updated task."))
    }

    /// Removes existing task.
    pub async fn remove_task(&self, id: u64) -> anyhow::Result<()> {
        let mut tasks = self.api.storage.load_tasks().await?;
        let tasks_count = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == tasks_count {
            bail!(Self::not_found(id));
        }

        self.api.storage.save_tasks(&tasks).await?;

        debug!(task.id = id, "Removed task.");
        Ok(())
    }

    /// Marks existing task as completed. Completing already completed task is a no-op.
    pub async fn complete_task(&self, id: u64) -> anyhow::Result<Task> {
        self.modify_task(id, |task| {
            task.completed = true;
            Ok(())
        })
        .await
        .inspect(|task| debug!(task.id = task.id, "Completed task."))
    }

    /// Moves due date of the existing task by the specified number of minutes. The shift is
    /// relative to the current due date, so subsequent snoozes accumulate.
    pub async fn snooze_task(&self, id: u64, params: TaskSnoozeParams) -> anyhow::Result<Task> {
        let Some(snooze_minutes) = params.snooze_minutes.filter(|minutes| *minutes != 0) else {
            bail!(TaskminderError::client("Snooze minutes are required."));
        };

        let Some(snooze_duration) = snooze_minutes.checked_mul(60).map(Duration::seconds) else {
            bail!(Self::snooze_out_of_range(snooze_minutes));
        };

        self.modify_task(id, |task| {
            task.due_date = task
                .due_date
                .checked_add(snooze_duration)
                .ok_or_else(|| anyhow!(Self::snooze_out_of_range(snooze_minutes)))?;
            Ok(())
        })
        .await
        .inspect(|task| {
            debug!(
                task.id = task.id,
                snooze_minutes, "Snoozed task until {}.", task.due_date
            )
        })
    }

    /// Loads all tasks, applies modification to the task with the specified ID, and saves tasks.
    async fn modify_task(
        &self,
        id: u64,
        modify: impl FnOnce(&mut Task) -> anyhow::Result<()>,
    ) -> anyhow::Result<Task> {
        let mut tasks = self.api.storage.load_tasks().await?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            bail!(Self::not_found(id));
        };

        modify(task)?;
        let task = task.clone();

        self.api.storage.save_tasks(&tasks).await?;

        Ok(task)
    }

    fn normalize_due_date(&self, due_date: &str) -> anyhow::Result<OffsetDateTime> {
        normalize_due_date(due_date, self.api.config.tasks.utc_offset)
            .map_err(|err| TaskminderError::client(err).into())
    }

    fn not_found(id: u64) -> TaskminderError {
        TaskminderError::not_found(format!("Task ('{id}') is not found."))
    }

    fn snooze_out_of_range(snooze_minutes: i64) -> TaskminderError {
        TaskminderError::client(format!(
            "Snooze minutes value ({snooze_minutes}) is out of range."
        ))
    }
}

impl<S: TaskStorage> Api<S> {
    /// Returns an API to work with tasks.
    pub fn tasks(&self) -> TasksApiExt<'_, S> {
        TasksApiExt::new(self)
    }
}
