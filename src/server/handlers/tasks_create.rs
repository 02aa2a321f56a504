use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use taskminder_types::tasks::{Task, TaskCreateParams};
use tracing::error;

/// Creates a new task with the specified parameters.
#[utoipa::path(
    tags = ["tasks"],
    request_body = TaskCreateParams,
    responses(
        (status = CREATED, description = "Task was successfully created.", body = Task),
        (status = BAD_REQUEST, description = "Task title or due date is missing or invalid.")
    )
)]
#[post("/tasks")]
pub async fn tasks_create(
    state: web::Data<ServerState>,
    params: web::Json<TaskCreateParams>,
) -> Result<HttpResponse, TaskminderError> {
    match state.api.tasks().create_task(params.into_inner()).await {
        Ok(task) => Ok(HttpResponse::Created().json(task)),
        Err(err) => {
            error!("Failed to create task: {err:?}");
            Err(err.into())
        }
    }
}
