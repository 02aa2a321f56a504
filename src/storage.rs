mod file_storage;

pub use self::file_storage::FileStorage;
use std::future::Future;
use taskminder_types::{reminders::Reminder, tasks::Task};

/// Persistence for tasks and the latest published reminders. Both collections are always loaded
/// and saved as a whole.
pub trait TaskStorage: Send + Sync + 'static {
    /// Loads all tasks in storage order.
    fn load_tasks(&self) -> impl Future<Output = anyhow::Result<Vec<Task>>> + Send;

    /// Replaces all stored tasks with the specified ones.
    fn save_tasks(&self, tasks: &[Task]) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Loads the latest published reminders.
    fn load_reminders(&self) -> impl Future<Output = anyhow::Result<Vec<Reminder>>> + Send;

    /// Replaces stored reminders with the specified ones.
    fn save_reminders(
        &self,
        reminders: &[Reminder],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
