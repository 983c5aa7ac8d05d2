use crate::clock::SystemClock;
use crate::repositories::project::{InMemoryProjectRepository, StoreOptions};
use crate::seed::{builtin_projects, load_projects_from_file};
use crate::StoreResult;
use shared_lib::AppConfig;
use std::sync::Arc;
use tracing::info;

/// 根据配置加载种子数据并创建内存仓库（一站式函数）
///
/// 仓库由程序入口创建一次，再以句柄的形式传给服务层和HTTP层，不使用全局单例。
pub fn initialize_store(config: Arc<AppConfig>) -> StoreResult<InMemoryProjectRepository> {
    let seed = match &config.seed_file {
        Some(path) => load_projects_from_file(path)?,
        None => builtin_projects()?,
    };

    info!("🗄️ 项目仓库创建成功，共加载 {} 个项目", seed.len());

    Ok(InMemoryProjectRepository::new(
        seed,
        StoreOptions {
            latency: config.latency,
            id_strategy: config.id_strategy,
            clock: Arc::new(SystemClock),
        },
    ))
}
