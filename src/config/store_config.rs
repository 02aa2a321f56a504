use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the flat files that tasks and reminders are persisted to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the JSON file with all tasks.
    pub tasks_path: PathBuf,
    /// Path to the JSON file with the latest published reminders.
    pub reminders_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_path: PathBuf::from("tasks.json"),
            reminders_path: PathBuf::from("reminders.json"),
        }
    }
}
