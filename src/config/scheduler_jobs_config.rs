use serde::{Deserialize, Serialize};

/// Configuration for the Taskminder scheduler jobs.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SchedulerJobsConfig {
    /// Indicates whether the scheduler should run any jobs.
    pub enabled: bool,
    /// The schedule to use for the `RemindersDerive` job.
    pub reminders_derive: String,
}

impl Default for SchedulerJobsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminders_derive: "0 * * * * *".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SchedulerJobsConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(SchedulerJobsConfig::default(), @r###"
        enabled = true
        reminders_derive = '0 * * * * *'
        "###);
    }

    #[test]
    fn deserialization() {
        let config: SchedulerJobsConfig = toml::from_str(
            r#"
        enabled = true
        reminders_derive = '0 * * * * *'
    "#,
        )
        .unwrap();
        assert_eq!(config, SchedulerJobsConfig::default());
    }
}
