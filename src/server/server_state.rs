mod scheduler_status;
mod status;

pub use self::{scheduler_status::SchedulerStatus, status::Status};
use crate::{
    api::Api,
    scheduler::Scheduler,
    storage::{FileStorage, TaskStorage},
};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct ServerState<S: TaskStorage = FileStorage> {
    pub api: Arc<Api<S>>,
    pub scheduler: RwLock<Scheduler<S>>,
    /// Version of the API server.
    version: String,
}

impl<S: TaskStorage> ServerState<S> {
    pub fn new(api: Arc<Api<S>>, scheduler: Scheduler<S>) -> Self {
        Self {
            api,
            scheduler: RwLock::new(scheduler),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Gets the status of the server.
    pub async fn status(&self) -> anyhow::Result<Status> {
        Ok(Status {
            version: self.version.clone(),
            scheduler: self.scheduler.write().await.status().await?,
        })
    }
}
