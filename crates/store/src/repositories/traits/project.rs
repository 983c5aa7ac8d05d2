//! 项目仓库 trait 定义
//!
//! 定义项目存储操作的抽象接口

use crate::models::project::{Project, ProjectFormData};
use crate::StoreResult;
use std::sync::Arc;

/// 项目仓库trait定义
///
/// 定义了项目相关的存储操作接口，支持：
/// - 项目列表（按存储顺序）
/// - 项目创建
/// - 项目查询
/// - 项目更新
/// - 项目删除
///
/// 仓库只负责存储，不做表单校验，校验由上层服务完成。
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 获取当前全部项目
    ///
    /// 返回的是一个不可变快照，后续修改会生成新的列表，不会影响已经拿到的快照
    async fn list_projects(&self) -> StoreResult<Arc<Vec<Project>>>;

    /// 根据 ID 获取项目信息
    async fn get_project_by_id(&self, id: &str) -> StoreResult<Project>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 表单数据
    ///
    /// # 返回值
    /// 返回创建的项目，包含新分配的ID和时间戳
    async fn create_project(&self, project: ProjectFormData) -> StoreResult<Project>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 新的表单数据，整体替换可编辑字段
    ///
    /// # 返回值
    /// 返回更新后的项目信息
    async fn update_project(&self, id: &str, update: ProjectFormData) -> StoreResult<Project>;

    /// 删除项目
    ///
    /// # 返回值
    /// 返回被删除的项目信息
    async fn delete_project(&self, id: &str) -> StoreResult<Project>;
}
