use crate::{error::Error as TaskminderError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use taskminder_types::tasks::Task;
use tracing::error;

/// Gets a list of all tasks in the order they were created.
#[utoipa::path(
    tags = ["tasks"],
    responses(
        (status = 200, description = "A list of all tasks.", body = [Task])
    )
)]
#[get("/tasks")]
pub async fn tasks_list(state: web::Data<ServerState>) -> Result<HttpResponse, TaskminderError> {
    match state.api.tasks().get_tasks().await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(tasks)),
        Err(err) => {
            error!("Failed to retrieve tasks: {err:?}");
            Err(err.into())
        }
    }
}
