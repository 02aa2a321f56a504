mod handlers;
mod server_state;

use crate::{
    api::Api,
    config::{Config, RawConfig},
    error::Error as TaskminderError,
    scheduler::Scheduler,
    server::handlers::TaskminderOpenApi,
    storage::FileStorage,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer, Result};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use server_state::{SchedulerStatus, ServerState, Status};

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let http_port = raw_config.port;
    let config = Config::from(raw_config);
    let storage = FileStorage::new(&config.store);
    let api = Arc::new(Api::new(config, storage));

    if let Err(err) = api.reminders().restore_reminders().await {
        warn!("Failed to restore reminders, starting with an empty set: {err:?}");
    }

    let scheduler = Scheduler::start(api.clone()).await?;
    let state = web::Data::new(ServerState::new(api, scheduler));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .app_data(json_config())
            .service(RapiDoc::with_openapi(
                "/api-docs/openapi.json",
                TaskminderOpenApi::openapi(),
            )
            .path("/api-docs"))
            .service(handlers::status_get::status_get)
            .service(handlers::tasks_list::tasks_list)
            .service(handlers::tasks_create::tasks_create)
            .service(handlers::tasks_update::tasks_update)
            .service(handlers::tasks_remove::tasks_remove)
            .service(handlers::tasks_complete::tasks_complete)
            .service(handlers::tasks_snooze::tasks_snooze)
            .service(handlers::reminders_list::reminders_list)
            .wrap(Cors::permissive())
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("Taskminder API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .context("Failed to run Taskminder API server.")
}

/// Reports malformed JSON payloads the same way as the rest of the client errors.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _| TaskminderError::client(err.to_string()).into())
}
