use serde::{Deserialize, Serialize};
use time::UtcOffset;

time::serde::format_description!(
    utc_offset_format,
    UtcOffset,
    "[offset_hour sign:mandatory]:[offset_minute]"
);

/// Configuration for the tasks.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TasksConfig {
    /// UTC offset used to interpret due dates that don't specify one (e.g. `2024-12-01T10:30`).
    #[serde(with = "utc_offset_format")]
    pub utc_offset: UtcOffset,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::UTC,
        }
    }
}
