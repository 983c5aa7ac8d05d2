use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use dashboard::ProjectService;
use shared_lib::AppConfig;
use store::initialize_store;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    let level: tracing::Level = config
        .log_level
        .parse()
        .context("Can not parse LOG_LEVEL in environment")
        .suggestion("设置 LOG_LEVEL 为 trace / debug / info / warn / error 之一")?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let repository = initialize_store(config.clone()).context("Initialize project store")?;
    let project_service = ProjectService::new(repository.clone(), repository.clock());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            // 无法监听信号时保持服务运行，由进程管理器负责结束
            error!("❌ 监听退出信号失败: {}", err);
            std::future::pending::<()>().await;
        }
        info!("🛑 收到退出信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, project_service, shutdown_rx).await?;

    info!("👋 服务已退出");
    Ok(())
}
