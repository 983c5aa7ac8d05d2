//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::confirm::Confirm;
use crate::error::ServiceResult;
use chrono::NaiveDate;
use std::sync::Arc;
use store::{Project, ProjectFormData};

/// 项目服务 trait 定义
///
/// 定义了项目相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`crate::ProjectService`] 提供。
/// 看板控制器和HTTP接口都只依赖这个 trait，底层仓库可以随时替换。
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + Clone + 'static {
    /// 当前全部项目（未过滤）
    async fn list_projects(&self) -> ServiceResult<Arc<Vec<Project>>>;

    /// 根据 ID 获取项目信息
    async fn get_project_by_id(&self, id: &str) -> ServiceResult<Project>;

    /// 创建新项目
    ///
    /// 先执行表单校验，校验失败时不会调用仓库
    async fn create_project(&self, project: ProjectFormData) -> ServiceResult<Project>;

    /// 更新项目信息
    ///
    /// 先执行表单校验，校验失败时不会调用仓库
    async fn update_project(&self, id: &str, update: ProjectFormData) -> ServiceResult<Project>;

    /// 删除项目
    ///
    /// # 返回值
    /// - `Ok(Some(project))`: 确认后删除成功
    /// - `Ok(None)`: 用户取消，没有任何修改
    async fn delete_project(&self, id: &str, confirm: &dyn Confirm) -> ServiceResult<Option<Project>>;

    /// 截止日期校验使用的“今天”
    fn today(&self) -> NaiveDate;
}
