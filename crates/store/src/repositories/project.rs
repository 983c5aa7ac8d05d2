//! 项目仓库
//!
//! 负责项目列表的内存存储，每个修改操作之前都会等待一段模拟延迟

use crate::clock::{Clock, SystemClock};
use crate::ids::id_generator;
use crate::models::project::{Project, ProjectFormData};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{IdGenerator, StoreError, StoreResult};
use shared_lib::{IdStrategy, SimulatedLatency};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// 内存仓库的构建参数
#[derive(Clone)]
pub struct StoreOptions {
    pub latency: SimulatedLatency,
    pub id_strategy: IdStrategy,
    pub clock: Arc<dyn Clock>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            latency: SimulatedLatency::default(),
            id_strategy: IdStrategy::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

/// 内存项目仓库
///
/// 项目列表保存在 `Arc<Vec<Project>>` 中，每次修改都会生成一个新的列表再整体替换（copy-on-write），
/// 所以已经通过 [`ProjectRepositoryTrait::list_projects`] 拿到的快照永远不会被修改。
///
/// 克隆得到的是同一个仓库的句柄。
#[derive(Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Arc<Vec<Project>>>>,
    latency: SimulatedLatency,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for InMemoryProjectRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryProjectRepository")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl InMemoryProjectRepository {
    /// 使用种子数据创建新的仓库实例
    pub fn new(seed: Vec<Project>, options: StoreOptions) -> Self {
        let ids = id_generator(options.id_strategy, &seed);
        Self {
            projects: Arc::new(RwLock::new(Arc::new(seed))),
            latency: options.latency,
            ids,
            clock: options.clock,
        }
    }

    /// 替换ID生成器
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// 仓库使用的时钟
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for InMemoryProjectRepository {
    async fn list_projects(&self) -> StoreResult<Arc<Vec<Project>>> {
        let projects = self.projects.read().await;
        Ok(Arc::clone(&projects))
    }

    async fn get_project_by_id(&self, id: &str) -> StoreResult<Project> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let projects = self.projects.read().await;
        projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// 创建新项目
    ///
    /// 等待模拟延迟之后：
    /// 1. 通过ID生成器分配新ID
    /// 2. `createdAt` 和 `updatedAt` 设置为当前时间
    /// 3. 追加到列表末尾
    async fn create_project(&self, project: ProjectFormData) -> StoreResult<Project> {
        debug!("📝 创建项目: {:#?}", project);

        simulate_latency(self.latency.create).await;

        let mut projects = self.projects.write().await;
        let id = self.ids.next_id(projects.as_slice())?;
        let created = Project::from_form(id, project, self.clock.now());

        let mut next = Vec::with_capacity(projects.len() + 1);
        next.extend(projects.iter().cloned());
        next.push(created.clone());
        *projects = Arc::new(next);

        debug!("✅ 项目创建成功: {:#?}", created);
        Ok(created)
    }

    /// 更新项目信息
    ///
    /// `id` 和 `createdAt` 保持不变，其他字段整体替换，`updatedAt` 刷新为当前时间
    async fn update_project(&self, id: &str, update: ProjectFormData) -> StoreResult<Project> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        simulate_latency(self.latency.update).await;

        let mut projects = self.projects.write().await;
        let existing = projects.iter().find(|p| p.id == id).ok_or_else(|| StoreError::not_found(id))?;
        let updated = existing.with_update(update, self.clock.now());

        let next: Vec<Project> = projects
            .iter()
            .map(|p| if p.id == id { updated.clone() } else { p.clone() })
            .collect();
        *projects = Arc::new(next);

        debug!("✅ 项目更新成功: {:#?}", updated);
        Ok(updated)
    }

    /// 删除项目
    async fn delete_project(&self, id: &str) -> StoreResult<Project> {
        debug!("🗑️ 删除项目: {}", id);

        simulate_latency(self.latency.delete).await;

        let mut projects = self.projects.write().await;
        let removed = projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))?;

        let next: Vec<Project> = projects.iter().filter(|p| p.id != id).cloned().collect();
        *projects = Arc::new(next);

        debug!("✅ 项目删除成功: {}", removed.id);
        Ok(removed)
    }
}
