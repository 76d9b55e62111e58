use anyhow::Result;
use igp_shortlist::{cancel_pair, utils::logging, App, Config};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config)?;

    // Ctrl-C 只在页或职员之间生效
    let (cancel_handle, cancel) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("⚠️ 收到中断信号，将在当前请求完成后停止");
            cancel_handle.cancel();
        }
    });

    // 初始化并运行应用
    let app = App::initialize(config, cancel).await?;
    if let Err(e) = app.run().await {
        error!("❌ 运行终止: {:#}", e);
        return Err(e);
    }

    Ok(())
}
