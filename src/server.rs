use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::{AppState, router, scheduler::spawn_sweeper};

/// 启动定时扫描并在 `listener` 上提供服务，直到 `shutdown` 完成。
///
/// 关闭时先停止接受新连接并处理完已有请求，再停止定时任务。
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let sweeper = spawn_sweeper(state.reminders.clone(), state.config.reminder_interval());
    let app = router::app(state);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    sweeper.shutdown().await;
    served.context("Server error")?;
    tracing::info!("Server closed");

    Ok(())
}
