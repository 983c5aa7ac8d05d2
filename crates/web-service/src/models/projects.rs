use chrono::{DateTime, NaiveDate, Utc};
use dashboard::{FieldErrors, FormField, ProjectFilter, ProjectForm, ProjectStats, StatusFilter, TeamMemberFilter};
use serde::{Deserialize, Serialize};
use store::{ParseStatusError, Project};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const STATUS_INVALID: &str = "Status must be one of: active, on hold, completed";

/// 搜索项目列表信息
///
/// 所有参数都是可选参数，`status` / `teamMember` 传 `"all"` 等价于不传
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSearch {
    #[schema(example = "migration")]
    #[validate(length(max = 100))]
    /// 搜索词，不区分大小写匹配项目名称或描述
    pub search_term: Option<String>,

    #[schema(example = "on hold")]
    /// 项目状态：active / on hold / completed / all
    pub status: Option<String>,

    #[schema(example = "Lisa Park")]
    /// 负责人（精确匹配）
    pub team_member: Option<String>,
}

impl ProjectSearch {
    /// 转换为看板的过滤条件，状态不合法时返回错误
    pub fn to_filter(&self) -> Result<ProjectFilter, ParseStatusError> {
        let status = match self.status.as_deref() {
            Some(status) => status.parse()?,
            None => StatusFilter::All,
        };
        let team_member = self
            .team_member
            .as_deref()
            .map(|member| member.parse::<TeamMemberFilter>().unwrap_or_default())
            .unwrap_or(TeamMemberFilter::All);

        Ok(ProjectFilter {
            search_term: self.search_term.clone().unwrap_or_default(),
            status,
            team_member,
        })
    }
}

/// 项目表单提交内容
///
/// 字段和页面表单一致，全部是原始输入文本：
/// - 新建时缺失的字段按空值处理
/// - 更新时缺失的字段保持项目当前的值
///
/// 文本长度上限（名称200 / 负责人100 / 描述2000个字符）在表单校验之前检查，超出时直接返回400
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormRequest {
    #[schema(example = "New Test Project")]
    #[validate(length(max = 200))]
    pub name: Option<String>,

    #[schema(example = "active")]
    pub status: Option<String>,

    #[schema(example = "John Doe")]
    #[validate(length(max = 100))]
    pub assigned_team_member: Option<String>,

    #[schema(example = "2026-01-31")]
    /// 截止日期，格式为 `YYYY-MM-DD`
    pub deadline: Option<String>,

    #[schema(example = "50000")]
    /// 预算输入框的原始内容，服务端会先过滤非数字字符并保留两位小数
    pub budget: Option<String>,

    #[schema(example = "Migration from legacy database")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl ProjectFormRequest {
    /// 把提交内容逐个字段输入到表单中
    pub fn apply_to(self, form: &mut ProjectForm) -> Result<(), FieldErrors> {
        let inputs = [
            (FormField::Name, self.name),
            (FormField::Status, self.status),
            (FormField::AssignedTeamMember, self.assigned_team_member),
            (FormField::Deadline, self.deadline),
            (FormField::Budget, self.budget),
            (FormField::Description, self.description),
        ];

        for (field, value) in inputs {
            let Some(raw) = value else { continue };
            if form.input(field, &raw).is_err() {
                let mut errors = FieldErrors::new();
                errors.insert(field, STATUS_INVALID);
                return Err(errors);
            }
        }
        Ok(())
    }
}

/// 删除项目的查询参数
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// 确认删除，不为 `true` 时不会删除任何数据
    #[param(example = true)]
    pub confirm: Option<bool>,
}

#[derive(Deserialize, Debug, ToSchema, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[schema(example = "1")]
    /// 项目ID
    pub id: String,

    #[schema(example = "E-commerce Platform Redesign")]
    pub name: String,

    #[schema(example = "active")]
    pub status: String,

    #[schema(example = "Active")]
    /// 页面展示的状态名称
    pub status_label: String,

    #[schema(example = "2024-03-15")]
    pub deadline: NaiveDate,

    #[schema(example = "Sarah Johnson")]
    pub assigned_team_member: String,

    #[schema(example = 75000)]
    pub budget: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectInfo {
    fn from(project: Project) -> Self {
        Self {
            status: project.status.as_str().to_string(),
            status_label: project.status.label().to_string(),
            id: project.id,
            name: project.name,
            deadline: project.deadline,
            assigned_team_member: project.assigned_team_member,
            budget: project.budget,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// 各状态项目数量
#[derive(Deserialize, Debug, ToSchema, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatsInfo {
    #[schema(example = 8)]
    pub total: usize,
    #[schema(example = 4)]
    pub active: usize,
    #[schema(example = 2)]
    pub on_hold: usize,
    #[schema(example = 2)]
    pub completed: usize,
}

impl From<ProjectStats> for ProjectStatsInfo {
    fn from(stats: ProjectStats) -> Self {
        Self {
            total: stats.total,
            active: stats.active,
            on_hold: stats.on_hold,
            completed: stats.completed,
        }
    }
}

/// 搜索结果，包含看板需要的全部派生数据
#[derive(Deserialize, Debug, ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSearchReply {
    /// 过滤之后的项目，保持原有顺序
    pub data: Vec<ProjectInfo>,

    #[schema(example = 8)]
    /// 过滤之前的总数
    pub total: usize,

    pub stats: ProjectStatsInfo,

    /// 负责人下拉框选项
    pub team_members: Vec<String>,

    /// 是否有过滤条件生效
    pub filters_active: bool,
}
