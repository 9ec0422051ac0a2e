use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use super::model::Reminder;

/// 进程内的提醒存储。
///
/// 克隆得到的是同一份数据的句柄；每个操作在整个临界区内持有锁，
/// 插入与扫描因此严格串行。
#[derive(Debug, Clone, Default)]
pub struct ReminderStore {
    reminders: Arc<Mutex<Vec<Reminder>>>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Vec 上的每次修改都是完整的，锁中毒时数据仍然一致
    fn lock(&self) -> MutexGuard<'_, Vec<Reminder>> {
        self.reminders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 添加提醒，返回新建的提醒
    pub fn add(
        &self,
        user_id: Option<Value>,
        message: Option<Value>,
        time: Option<Value>,
    ) -> Reminder {
        let reminder = Reminder::new(user_id, message, time);
        self.lock().push(reminder.clone());

        info!(
            reminder_id = %reminder.id,
            "Reminder added: {} for user {} at {}",
            reminder.message_text(),
            reminder.user_text(),
            reminder.time_text()
        );
        if !reminder.scheduled_time.is_valid() {
            warn!(
                reminder_id = %reminder.id,
                "Scheduled time {} is not a valid time, reminder will never be due",
                reminder.time_text()
            );
        }

        reminder
    }

    /// 当前所有待投递的提醒，按插入顺序
    pub fn list(&self) -> Vec<Reminder> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 投递并移除所有到期的提醒，返回被投递的提醒
    pub fn sweep(&self) -> Vec<Reminder> {
        let mut reminders = self.lock();
        let now = Utc::now();
        let due = take_due(&mut reminders, now);
        drop(reminders);

        deliver(&due);
        due
    }

    /// 以给定时刻作为当前时间执行一次扫描
    pub fn sweep_at(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        let due = take_due(&mut self.lock(), now);
        deliver(&due);
        due
    }
}

fn take_due(reminders: &mut Vec<Reminder>, now: DateTime<Utc>) -> Vec<Reminder> {
    let (due, pending): (Vec<_>, Vec<_>) = reminders.drain(..).partition(|r| r.is_due(now));
    *reminders = pending;
    due
}

// 目前没有真正的通知通道，投递即记录日志
fn deliver(due: &[Reminder]) {
    for reminder in due {
        info!(
            reminder_id = %reminder.id,
            "[REMINDER] {} - User: {}",
            reminder.message_text(),
            reminder.user_text()
        );
    }
}
