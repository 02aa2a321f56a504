use crate::{config::StoreConfig, error::Error as TaskminderError, storage::TaskStorage};
use anyhow::{anyhow, Context};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};
use taskminder_types::{reminders::Reminder, tasks::Task};
use tokio::fs;
use tracing::{debug, error};

/// Storage that keeps tasks and reminders in two JSON files.
#[derive(Clone, Debug)]
pub struct FileStorage {
    tasks_path: PathBuf,
    reminders_path: PathBuf,
}

impl FileStorage {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            tasks_path: config.tasks_path.clone(),
            reminders_path: config.reminders_path.clone(),
        }
    }

    /// Reads all records from the file. A file that doesn't exist yet holds no records.
    async fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file doesn't exist yet, assuming no records.");
                return Ok(vec![]);
            }
            Err(err) => {
                error!(path = %path.display(), "Failed to read store file: {err}");
                return Err(TaskminderError::storage(
                    anyhow!(err).context(format!("Cannot read {}.", path.display())),
                )
                .into());
            }
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(vec![]);
        }

        serde_json::from_slice(&content).map_err(|err| {
            error!(path = %path.display(), "Store file is corrupted: {err}");
            TaskminderError::storage(
                anyhow!(err).context(format!("Cannot parse {}.", path.display())),
            )
            .into()
        })
    }

    /// Replaces the file content with the specified records.
    async fn write_records<T: Serialize + Sync>(path: &Path, records: &[T]) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(records)
            .with_context(|| format!("Cannot serialize records for {}.", path.display()))?;

        let write_result = async {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, content).await
        }
        .await;

        write_result.map_err(|err| {
            error!(path = %path.display(), "Failed to write store file: {err}");
            TaskminderError::storage(
                anyhow!(err).context(format!("Cannot write {}.", path.display())),
            )
            .into()
        })
    }
}

impl TaskStorage for FileStorage {
    async fn load_tasks(&self) -> anyhow::Result<Vec<Task>> {
        Self::read_records(&self.tasks_path).await
    }

    async fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        Self::write_records(&self.tasks_path, tasks).await
    }

    async fn load_reminders(&self) -> anyhow::Result<Vec<Reminder>> {
        Self::read_records(&self.reminders_path).await
    }

    async fn save_reminders(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        Self::write_records(&self.reminders_path, reminders).await
    }
}
