use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{patch, web, HttpResponse};
use taskminder_types::tasks::Task;
use tracing::error;

/// Marks the task with the specified ID as completed.
#[utoipa::path(
    tags = ["tasks"],
    params(
        ("task_id" = u64, Path, description = "A unique task ID."),
    ),
    responses(
        (status = 200, description = "Task was successfully completed.", body = Task),
        (status = NOT_FOUND, description = "Task with the specified ID doesn't exist.")
    )
)]
#[patch("/tasks/{task_id}/complete")]
pub async fn tasks_complete(
    state: web::Data<ServerState>,
    task_id: web::Path<u64>,
) -> Result<HttpResponse, TaskminderError> {
    let task_id = task_id.into_inner();
    match state.api.tasks().complete_task(task_id).await {
        Ok(task) => Ok(HttpResponse::Ok().json(task)),
        Err(err) => {
            error!(task.id = task_id, "Failed to complete task: {err:?}");
            Err(err.into())
        }
    }
}
