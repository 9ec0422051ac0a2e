use config::Config;
use reminder::ReminderStore;

pub mod config;
pub mod error;
pub mod middleware;
pub mod reminder;
pub mod router;
pub mod routes;
pub mod scheduler;
pub mod server;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reminders: ReminderStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            reminders: ReminderStore::new(),
        }
    }
}
