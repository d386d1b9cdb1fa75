use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C，与服务器 future 竞争
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        // 无法监听信号时只能等待服务器自行退出
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}
