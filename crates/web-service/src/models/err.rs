use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dashboard::{FieldErrors, ServiceError};
use serde_json::json;
use store::ParseStatusError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求参数格式错误，比如字符串超长，转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 表单字段校验失败，返回每个字段的错误信息
    #[error("表单校验失败: {0}")]
    FormInvalid(FieldErrors),

    /// 过滤条件中的状态不合法
    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),

    /// 删除请求没有带上确认参数
    #[error("删除项目需要确认")]
    ConfirmationRequired,

    /// 服务层错误
    #[error(transparent)]
    ServiceError(#[from] ServiceError),
}

fn field_errors_response(errors: &FieldErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::FormInvalid(errors) => field_errors_response(&errors),
            AppError::InvalidStatus(err) => (StatusCode::BAD_REQUEST, format!("Invalid status filter: {err}")).into_response(),
            AppError::ConfirmationRequired => (
                StatusCode::PRECONDITION_REQUIRED,
                "Deleting a project requires confirm=true".to_string(),
            )
                .into_response(),
            AppError::ServiceError(err) => match err {
                ServiceError::Validation(errors) => field_errors_response(&errors),
                err if err.is_not_found() => (StatusCode::NOT_FOUND, format!("Resource not found: {err}")).into_response(),
                err => (StatusCode::INTERNAL_SERVER_ERROR, format!("Service error: {err}")).into_response(),
            },
        }
    }
}
