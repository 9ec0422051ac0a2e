// 提醒模块
// 包含提醒数据结构、计划时间换算和内存存储

mod model;
mod store;
mod time;

pub use model::{Reminder, display_opaque};
pub use store::ReminderStore;
pub use time::{ScheduledTime, to_instant};
