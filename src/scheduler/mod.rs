use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::reminder::ReminderStore;

/// 定时扫描任务的句柄，用于在关闭时停止任务
pub struct SweeperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// 通知任务停止并等待其退出，正在进行的扫描会先完成
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            error!("Reminder sweeper task failed: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// 启动定时扫描：启动时立即扫描一次，之后每隔 `period` 扫描一次
pub fn spawn_sweeper(store: ReminderStore, period: Duration) -> SweeperHandle {
    let (shutdown, mut stop) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("Reminder sweeper started, interval {:?}", period);

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    let delivered = store.sweep();
                    debug!(
                        delivered = delivered.len(),
                        pending = store.len(),
                        "Reminder sweep finished"
                    );
                }
            }
        }

        info!("Reminder sweeper stopped");
    });

    SweeperHandle { shutdown, task }
}
