use color_eyre::Result;
use database::initialize_database;
use shared_lib::AppConfig;
use storage::UploadClient;
use tokio::sync::watch;
use tracing::info;
use web_service::start_web_service;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚀 启动 Web Service...");

    // 加载配置，初始化外部依赖
    let config = AppConfig::load()?;
    let pool = initialize_database(config.clone()).await?;
    let uploader = UploadClient::new(&config.storage)?;

    // ctrl-c 触发优雅关闭
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("收到退出信号，准备关闭服务");
            let _ = shutdown_tx.send(true);
        }
    });

    start_web_service(pool, uploader, config, shutdown_rx).await
}
