use crate::utils::UtcTimestamp;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A user-created task that has to be done before its due date.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id.
    pub id: u64,
    /// Short title of the task.
    pub title: String,
    /// Optional free-form description of the task.
    #[serde(default)]
    pub description: String,
    /// Date and time when the task is due, always stored in UTC.
    #[serde_as(as = "UtcTimestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub due_date: OffsetDateTime,
    /// Whether the task has been completed. Completed tasks never produce reminders.
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use crate::tests::MockTaskBuilder;
    use crate::tasks::Task;
    use insta::assert_json_snapshot;
    use time::macros::datetime;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let task = MockTaskBuilder::create(1, "Buy milk")?
            .with_description("Two bottles.")
            .with_due_date(datetime!(2024-12-01 10:30:15.250 +02:00))
            .build();
        assert_json_snapshot!(task, @r###"
        {
          "id": 1,
          "title": "Buy milk",
          "description": "Two bottles.",
          "dueDate": "2024-12-01T08:30:15.250Z",
          "completed": false
        }
        "###);

        let task = MockTaskBuilder::create(2, "Call mom")?
            .with_due_date(datetime!(2024-12-01 10:30 UTC))
            .completed()
            .build();
        assert_json_snapshot!(task, @r###"
        {
          "id": 2,
          "title": "Call mom",
          "description": "",
          "dueDate": "2024-12-01T10:30:00.000Z",
          "completed": true
        }
        "###);

        Ok(())
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<Task>(
                r#"{ "id": 3, "title": "Pay rent", "description": "Before noon.", "dueDate": "2024-12-01T10:30:00.000Z", "completed": true }"#
            )?,
            MockTaskBuilder::create(3, "Pay rent")?
                .with_description("Before noon.")
                .with_due_date(datetime!(2024-12-01 10:30 UTC))
                .completed()
                .build()
        );

        // Optional fields and non-UTC offsets.
        let task = serde_json::from_str::<Task>(
            r#"{ "id": 4, "title": "Pay rent", "dueDate": "2024-12-01T12:30:00+02:00" }"#,
        )?;
        assert_eq!(
            task,
            MockTaskBuilder::create(4, "Pay rent")?
                .with_due_date(datetime!(2024-12-01 10:30 UTC))
                .build()
        );
        assert!(task.due_date.offset().is_utc());

        assert!(serde_json::from_str::<Task>(
            r#"{ "id": 5, "title": "Pay rent", "dueDate": "tomorrow" }"#
        )
        .is_err());

        // Timestamps that can't be represented in UTC are rejected instead of panicking.
        let err = serde_json::from_str::<Task>(
            r#"{ "id": 6, "title": "Pay rent", "dueDate": "9999-12-31T23:30:00-02:00" }"#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("timestamp `9999-12-31T23:30:00-02:00` is out of range in UTC"));

        Ok(())
    }
}
