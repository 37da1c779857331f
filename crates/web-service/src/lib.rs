//! Web服务模块
//!
//! 提供项目作品集的 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{DatabasePool, ProjectRepository};
use services::{ProjectService, ProjectServiceTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use storage::UploadClient;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

/// 应用共享状态
///
/// 服务启动时显式构造并注入到路由中，所有handler通过泛型参数访问，
/// 不使用任何全局单例。
pub struct AppState<PS: ProjectServiceTrait> {
    pub project_service: Arc<PS>,
}

// 手动实现Clone，避免给PS强加Clone约束
impl<PS: ProjectServiceTrait> Clone for AppState<PS> {
    fn clone(&self) -> Self {
        Self {
            project_service: self.project_service.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<ProjectService<ProjectRepository, UploadClient>>;

/// 启动 Web 服务
pub async fn start_web_service(
    pool: DatabasePool,
    uploader: UploadClient,
    config: Arc<AppConfig>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let project_service = ProjectService::new(ProjectRepository::new(pool.clone()), uploader);

    let shared_state = AppState {
        project_service: Arc::new(project_service),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.expect("Failed to receive shutdown signal");
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
