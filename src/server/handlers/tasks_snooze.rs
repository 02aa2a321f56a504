use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{patch, web, HttpResponse};
use taskminder_types::tasks::{Task, TaskSnoozeParams};
use tracing::error;

/// Postpones the due date of the task with the specified ID by the specified number of minutes.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    request_body = TaskSnoozeParams,
    responses(
        (status = 200, description = "Task was successfully snoozed.", body = Task),
        (status = BAD_REQUEST, description = "Snooze minutes are missing or invalid."),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[patch("/tasks/{task_id}/snooze")]
pub async fn tasks_snooze(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
    params: web::Json<TaskSnoozeParams>,
) -> Result<HttpResponse, TaskminderError> {
    let task_id = task_id.into_inner();
    match state
        .api
        .tasks()
        .snooze_task(task_id, params.into_inner())
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!(task.id = task_id, "Failed to snooze task: {err:?}");
            Err(err.into())
        }
    }
}
