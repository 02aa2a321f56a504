use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Configuration for the reminders.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RemindersConfig {
    /// How far ahead of the current time a due date can be for the task to produce a reminder.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub horizon: Duration,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            horizon: Duration::from_secs(15 * 60),
        }
    }
}
