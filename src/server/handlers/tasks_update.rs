use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{put, web, HttpResponse};
use taskminder_types::tasks::{Task, TaskUpdateParams};
use tracing::error;

/// Updates title, description, or due date of the task with the specified ID.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    request_body = TaskUpdateParams,
    responses(
        (status = 200, description = "Task was successfully updated.", body = Task),
        (status = BAD_REQUEST, description = "No properties were provided or they are invalid."),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[put("/tasks/{task_id}")]
pub async fn tasks_update(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
    params: web::Json<TaskUpdateParams>,
) -> Result<HttpResponse, TaskminderError> {
    let task_id = task_id.into_inner();
    match state
        .api
        .tasks()
        .update_task(task_id, params.into_inner())
        .await
    {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!(task.id = task_id, "Failed to update task: {err:?}");
            Err(err.into())
        }
    }
}
