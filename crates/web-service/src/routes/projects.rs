//! 项目相关接口
//!

use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::projects::{
    DeleteQuery, ProjectFormRequest, ProjectInfo, ProjectSearch, ProjectSearchReply, ProjectStatsInfo,
};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use dashboard::{filter_projects, team_members, PresetAnswer, ProjectForm, ProjectServiceTrait, ProjectStats};
use store::ProjectFormData;
use tracing::debug;
use validator::Validate;

/// 执行表单提交校验，失败时返回每个字段的错误信息
fn submit_form(form: &mut ProjectForm, today: NaiveDate) -> Result<ProjectFormData, AppError> {
    form.submit(today)
        .ok_or_else(|| AppError::FormInvalid(form.errors().clone()))
}

/// 根据查询参数搜索项目
///
/// 搜索词 / 状态 / 负责人三个条件同时生效，结果保持原有顺序。
/// body无法反序列化为 [`ProjectSearch`] 时axum会直接返回400。
///
/// 除了过滤之后的项目列表，还会返回看板需要的统计信息、负责人下拉框选项，
/// 以及过滤之前的项目总数（用于显示 "Showing N of M projects"）。
#[utoipa::path(post,
    path = "/search-projects",
    tag = "projects",
    request_body = ProjectSearch,
    responses(
        (status = 200, description = "Search results", body = ProjectSearchReply),
        (status = 400, description = "Invalid search parameters")
    ),
)]
pub async fn find_projects<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Json(search): Json<ProjectSearch>,
) -> Result<Json<ProjectSearchReply>, AppError> {
    debug!("🔍 搜索项目 {:#?}", search);

    // 验证输入参数，确保有效性
    search.validate()?;
    let filter = search.to_filter()?;

    let projects = state.project_service.list_projects().await?;
    let visible = filter_projects(&projects, &filter);

    Ok(Json(ProjectSearchReply {
        data: visible.into_iter().cloned().map(Into::into).collect(),
        total: projects.len(),
        stats: ProjectStats::from_projects(&projects).into(),
        team_members: team_members(&projects),
        filters_active: filter.is_active(),
    }))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，校验失败时返回 400 以及每个字段的错误信息
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectFormRequest,
    responses(
        (status = 200, description = "Create project result", body = Reply<ProjectInfo>),
        (status = 400, description = "Field validation errors")
    )
)]
pub async fn create_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Json(project): Json<ProjectFormRequest>,
) -> Result<Json<Reply<ProjectInfo>>, AppError> {
    debug!("Creating project {:#?}", project);

    project.validate()?;

    let mut form = ProjectForm::new();
    project.apply_to(&mut form).map_err(AppError::FormInvalid)?;
    let data = submit_form(&mut form, state.project_service.today())?;

    let project = state.project_service.create_project(data).await?;

    Ok(Json(Reply { data: project.into() }))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project detail", body = ProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectInfo>, AppError> {
    debug!("Getting project id {:#?}", project_id);

    let project = state.project_service.get_project_by_id(&project_id).await?;

    Ok(Json(project.into()))
}

/// 更新项目信息
///
/// 先用项目当前的值回填表单，再写入 [`ProjectFormRequest`] 中提交的字段，最后整体校验。
///
#[utoipa::path(patch,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "项目ID")),
    request_body = ProjectFormRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectInfo),
        (status = 400, description = "Field validation errors"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Path(project_id): Path<String>,
    Json(info): Json<ProjectFormRequest>,
) -> Result<Json<ProjectInfo>, AppError> {
    debug!("Updating project {} with {:#?}", project_id, info);

    info.validate()?;

    let existing = state.project_service.get_project_by_id(&project_id).await?;
    let mut form = ProjectForm::for_project(&existing);
    info.apply_to(&mut form).map_err(AppError::FormInvalid)?;
    let data = submit_form(&mut form, state.project_service.today())?;

    let project = state.project_service.update_project(&project_id, data).await?;

    Ok(Json(project.into()))
}

/// 删除指定的项目
///
/// 必须带上 `confirm=true`，否则返回 428 且不会删除任何数据
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "项目ID"), DeleteQuery),
    responses(
        (status = 200, description = "Deleted project", body = ProjectInfo),
        (status = 404, description = "Project not found"),
        (status = 428, description = "Confirmation required")
    )
)]
pub async fn delete_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Path(project_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<ProjectInfo>, AppError> {
    debug!("delete project {:#?}", project_id);

    let confirm = PresetAnswer(query.confirm.unwrap_or(false));
    let project = state
        .project_service
        .delete_project(&project_id, &confirm)
        .await?
        .ok_or(AppError::ConfirmationRequired)?;

    Ok(Json(project.into()))
}

/// 负责人下拉框选项，去重并按字母排序
#[utoipa::path(get,
    path = "/team-members",
    tag = "projects",
    responses(
        (status = 200, description = "Distinct team members", body = Reply<Vec<String>>)
    )
)]
pub async fn list_team_members<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
) -> Result<Json<Reply<Vec<String>>>, AppError> {
    let projects = state.project_service.list_projects().await?;

    Ok(Json(Reply {
        data: team_members(&projects),
    }))
}

/// 各状态项目数量
#[utoipa::path(get,
    path = "/stats",
    tag = "projects",
    responses(
        (status = 200, description = "Project counts by status", body = ProjectStatsInfo)
    )
)]
pub async fn project_stats<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
) -> Result<Json<ProjectStatsInfo>, AppError> {
    let projects = state.project_service.list_projects().await?;

    Ok(Json(ProjectStats::from_projects(&projects).into()))
}
