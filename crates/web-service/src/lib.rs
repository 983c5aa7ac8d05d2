//! Web服务模块
//!
//! 提供项目看板的 HTTP API 接口和文档服务

use color_eyre::eyre::Context;
use color_eyre::Result;
use dashboard::ProjectServiceTrait;
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{info, warn};

pub mod models;
pub mod routes;

/// 应用共享状态
pub struct AppState<PS: ProjectServiceTrait> {
    pub project_service: Arc<PS>,
}

impl<PS: ProjectServiceTrait> AppState<PS> {
    pub fn new(project_service: PS) -> Self {
        Self {
            project_service: Arc::new(project_service),
        }
    }
}

impl<PS: ProjectServiceTrait> Clone for AppState<PS> {
    fn clone(&self) -> Self {
        Self {
            project_service: Arc::clone(&self.project_service),
        }
    }
}

/// 启动 Web 服务
///
/// `shutdown_rx` 收到变更之后开始优雅关闭
pub async fn start_web_service<PS: ProjectServiceTrait>(
    config: Arc<AppConfig>,
    project_service: PS,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let router = routes::create_app_router(AppState::new(project_service));

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Bind web service to {}", config.bind_addr))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            if shutdown_rx.changed().await.is_err() {
                warn!("⚠️ 关闭信号发送端已经被释放");
            }
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
