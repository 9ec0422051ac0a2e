mod handler;
mod model;

pub use handler::{create_reminder, list_reminders};
pub use model::CreateReminderRequest;
