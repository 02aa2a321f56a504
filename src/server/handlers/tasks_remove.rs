use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{delete, web, HttpResponse};
use serde_json::json;
use tracing::error;

/// Removes the task with the specified ID.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task was successfully removed."),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[delete("/tasks/{task_id}")]
pub async fn tasks_remove(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
) -> Result<HttpResponse, TaskminderError> {
    let task_id = task_id.into_inner();
    match state.api.tasks().remove_task(task_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted." }))),
        Err(err) => {
            error!(task.id = task_id, "Failed to remove task: {err:?}");
            Err(err.into())
        }
    }
}
