//! 看板控制器
//!
//! 组合项目服务、过滤条件和表单，维护三个状态：
//! - `selection`: 当前正在编辑的项目（新建时为空）
//! - `modal_open`: 表单弹窗是否打开
//! - `pending`: 创建/更新是否正在进行
//!
//! 修改操作都需要 `&mut self`，所以同一时间只会有一个正在进行的提交。

use crate::confirm::Confirm;
use crate::error::{ServiceError, ServiceResult};
use crate::filter::{filter_projects, team_members, ProjectFilter, ProjectStats, StatusFilter, TeamMemberFilter};
use crate::form::ProjectForm;
use crate::services::ProjectServiceTrait;
use serde::Serialize;
use std::sync::Arc;
use store::Project;
use tracing::{debug, error, warn};

/// 提交结果
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 弹窗没有打开
    NoForm,
    /// 表单校验失败，错误信息已经写入表单
    Invalid,
    /// 保存成功，弹窗已关闭
    Saved(Project),
    /// 保存失败，错误已经记录到日志，弹窗保持打开
    Failed(ServiceError),
}

/// 删除结果
#[derive(Debug)]
pub enum DeleteOutcome {
    Declined,
    Deleted(Project),
    Failed(ServiceError),
}

/// 弹窗展示信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub editing_id: Option<String>,
}

/// 看板的派生视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// 过滤之后可见的项目
    pub projects: Vec<Project>,
    /// 未过滤的项目总数
    pub total: usize,
    pub stats: ProjectStats,
    /// 负责人下拉框选项
    pub team_members: Vec<String>,
    /// 是否显示“清除全部过滤条件”
    pub filters_active: bool,
    pub pending: bool,
    pub modal: Option<ModalView>,
}

pub struct DashboardController<PS: ProjectServiceTrait> {
    service: PS,
    projects: Arc<Vec<Project>>,
    filter: ProjectFilter,
    selection: Option<Project>,
    modal_open: bool,
    form: Option<ProjectForm>,
    pending: bool,
}

impl<PS: ProjectServiceTrait> DashboardController<PS> {
    /// 创建控制器并加载当前项目列表
    pub async fn new(service: PS) -> ServiceResult<Self> {
        let projects = service.list_projects().await?;
        Ok(Self {
            service,
            projects,
            filter: ProjectFilter::default(),
            selection: None,
            modal_open: false,
            form: None,
            pending: false,
        })
    }

    /// 重新读取项目列表
    pub async fn refresh(&mut self) -> ServiceResult<()> {
        self.projects = self.service.list_projects().await?;
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selection(&self) -> Option<&Project> {
        self.selection.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn form(&self) -> Option<&ProjectForm> {
        self.form.as_ref()
    }

    /// 可编辑的表单，保存中时表单被禁用
    pub fn form_mut(&mut self) -> Option<&mut ProjectForm> {
        if self.pending {
            return None;
        }
        self.form.as_mut()
    }

    /// “新建项目”
    pub fn open_add(&mut self) {
        self.selection = None;
        self.form = Some(ProjectForm::new());
        self.modal_open = true;
    }

    /// “编辑”某个项目，项目不存在时返回 `false`
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(project) = self.projects.iter().find(|p| p.id == id).cloned() else {
            warn!("⚠️ 要编辑的项目不存在: {}", id);
            return false;
        };

        self.form = Some(ProjectForm::for_project(&project));
        self.selection = Some(project);
        self.modal_open = true;
        true
    }

    /// 取消 / 点击遮罩 / ESC，无论是否正在保存都会关闭
    pub fn dismiss(&mut self) {
        self.modal_open = false;
        self.selection = None;
        self.form = None;
    }

    /// 提交表单
    ///
    /// 没有选中项目时创建，否则更新选中的项目
    pub async fn submit(&mut self) -> SubmitOutcome {
        let today = self.service.today();
        let Some(form) = self.form.as_mut() else {
            return SubmitOutcome::NoForm;
        };
        let Some(data) = form.submit(today) else {
            return SubmitOutcome::Invalid;
        };

        self.pending = true;
        let result = match &self.selection {
            None => self.service.create_project(data).await,
            Some(project) => self.service.update_project(&project.id, data).await,
        };
        self.pending = false;

        match result {
            Ok(project) => {
                debug!("✅ 项目已保存: {}", project.id);
                self.reload().await;
                self.dismiss();
                SubmitOutcome::Saved(project)
            }
            Err(err) => {
                error!("❌ 保存项目失败: {}", err);
                if let (ServiceError::Validation(errors), Some(form)) = (&err, self.form.as_mut()) {
                    form.set_errors(errors.clone());
                }
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// 删除项目，需要用户确认，不涉及弹窗
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> DeleteOutcome {
        match self.service.delete_project(id, confirm).await {
            Ok(None) => DeleteOutcome::Declined,
            Ok(Some(project)) => {
                self.reload().await;
                DeleteOutcome::Deleted(project)
            }
            Err(err) => DeleteOutcome::Failed(err),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_team_member_filter(&mut self, member: TeamMemberFilter) {
        self.filter.team_member = member;
    }

    /// 一次性清除三个过滤条件
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// 计算当前视图
    pub fn view(&self) -> DashboardView {
        DashboardView {
            projects: filter_projects(&self.projects, &self.filter).into_iter().cloned().collect(),
            total: self.projects.len(),
            stats: ProjectStats::from_projects(&self.projects),
            team_members: team_members(&self.projects),
            filters_active: self.filter.is_active(),
            pending: self.pending,
            modal: self.modal_view(),
        }
    }

    fn modal_view(&self) -> Option<ModalView> {
        if !self.modal_open {
            return None;
        }
        let form = self.form.as_ref()?;
        Some(ModalView {
            title: form.title(),
            submit_label: form.submit_label(self.pending),
            editing_id: self.selection.as_ref().map(|p| p.id.clone()),
        })
    }

    async fn reload(&mut self) {
        if let Err(err) = self.refresh().await {
            error!("❌ 重新加载项目列表失败: {}", err);
        }
    }
}
