use crate::server::ServerState;
use actix_web::{get, web, HttpResponse};
use taskminder_types::reminders::Reminder;

/// Gets a list of incomplete tasks that are overdue or due soon, as of the latest reminders
/// refresh.
#[utoipa::path(
    tags = ["reminders"],
    responses(
        (status = 200, description = "A list of reminders.", body = [Reminder])
    )
)]
#[get("/reminders")]
pub async fn reminders_list(state: web::Data<ServerState>) -> HttpResponse {
    HttpResponse::Ok().json(state.api.reminders().get_reminders().as_slice())
}

#[cfg(test)]
mod tests {
    use crate::server::{
        handlers::reminders_list::reminders_list, server_state::tests::mock_server_state,
    };
    use actix_web::{
        body::MessageBody,
        test::{call_service, init_service, TestRequest},
        web, App,
    };
    use std::str::from_utf8;
    use taskminder_types::{
        reminders::Reminder,
        tasks::{TaskCreateParams, TaskUpdateParams},
    };
    use tempfile::TempDir;
    use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

    #[tokio::test]
    async fn can_list_reminders() -> anyhow::Result<()> {
        let store_dir = TempDir::new()?;
        let server_state = web::Data::new(mock_server_state(&store_dir).await?);
        let app = init_service(
            App::new()
                .app_data(server_state.clone())
                .service(reminders_list),
        )
        .await;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskminder.dev/reminders").to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            "[]"
        );

        let now = OffsetDateTime::now_utc();
        let tasks = server_state.api.tasks();
        let due_soon = tasks
            .create_task(TaskCreateParams::new(
                "Buy milk",
                (now + Duration::minutes(5)).format(&Rfc3339)?,
            ))
            .await?;
        let overdue = tasks
            .create_task(TaskCreateParams::new(
                "Call mom",
                (now - Duration::days(1)).format(&Rfc3339)?,
            ))
            .await?;
        tasks
            .create_task(TaskCreateParams::new(
                "Pay rent",
                (now + Duration::days(7)).format(&Rfc3339)?,
            ))
            .await?;
        let completed = tasks
            .create_task(TaskCreateParams::new(
                "Water plants",
                (now - Duration::hours(1)).format(&Rfc3339)?,
            ))
            .await?;
        tasks.complete_task(completed.id).await?;

        // Reminders aren't changed until the next refresh.
        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskminder.dev/reminders").to_request(),
        )
        .await;
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            "[]"
        );

        server_state.api.reminders().refresh_reminders().await?;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskminder.dev/reminders").to_request(),
        )
        .await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            serde_json::to_string(&[Reminder::from(&due_soon), Reminder::from(&overdue)])?
        );

        // Updated task title is reflected after the next refresh.
        let updated = tasks
            .update_task(
                due_soon.id,
                TaskUpdateParams {
                    title: Some("Buy oat milk".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        server_state.api.reminders().refresh_reminders().await?;

        let response = call_service(
            &app,
            TestRequest::with_uri("https://taskminder.dev/reminders").to_request(),
        )
        .await;
        assert_eq!(
            from_utf8(&response.into_body().try_into_bytes().unwrap())?,
            serde_json::to_string(&[Reminder::from(&updated), Reminder::from(&overdue)])?
        );

        Ok(())
    }
}
