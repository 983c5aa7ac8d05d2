//! 路由入口
//!
//! [`create_app_router`] 把所有项目接口挂到 `/api/v1` 下，并在 `/docs` 提供在线文档。

use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_find_projects;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_list_team_members;
use crate::routes::projects::__path_project_stats;
use crate::routes::projects::__path_update_project;
use crate::routes::projects::{
    create_project, delete_project, find_projects, get_project, list_team_members, project_stats, update_project,
};
use crate::AppState;
use axum::Router;
use dashboard::ProjectServiceTrait;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod projects;

/// 项目接口路由，所有handler共享同一个 [`AppState`]
///
/// **❗️注意：** 每个 [`routes!`] 里的handler必须对应同一个路径，而且http方法不能重复，
/// 所以 `/projects` 和 `/projects/{id}` 需要分开注册。
fn routers<PS: ProjectServiceTrait>(state: AppState<PS>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_projects))
        .routes(routes!(create_project))
        .routes(routes!(get_project, update_project, delete_project))
        .routes(routes!(list_team_members))
        .routes(routes!(project_stats))
        .with_state(state)
}

/// 创建完整的App路由
///
/// 接口文档由 `utoipa` 根据handler上的 `#[utoipa::path]` 自动生成，
/// 最后拆分出axum的 [`Router`] 和OpenAPI文档，文档通过Scalar展示。
pub fn create_app_router<PS: ProjectServiceTrait>(shared_state: AppState<PS>) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Project Dashboard API"),
        tags(
            (name = "projects", description = r#"
项目看板接口：

- 搜索 / 过滤项目列表
- 新建、编辑、删除项目
- 负责人列表和状态统计
            "#)
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    router.merge(Scalar::with_url("/docs", api))
}
