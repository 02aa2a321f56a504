use crate::{
    config::Config,
    storage::{FileStorage, TaskStorage},
};
use arc_swap::ArcSwap;
use taskminder_types::reminders::Reminder;

pub struct Api<S: TaskStorage = FileStorage> {
    pub config: Config,
    pub storage: S,
    /// The latest published reminders snapshot, replaced as a whole on every refresh.
    pub(crate) reminders: ArcSwap<Vec<Reminder>>,
}

impl<S: TaskStorage> Api<S> {
    /// Instantiates APIs collection with the specified config and storage.
    pub fn new(config: Config, storage: S) -> Self {
        Self {
            config,
            storage,
            reminders: ArcSwap::from_pointee(vec![]),
        }
    }
}
