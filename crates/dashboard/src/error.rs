use crate::validation::FieldErrors;
use store::StoreError;
use thiserror::Error;

/// 服务层错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 表单校验失败，仓库没有被调用
    #[error("表单校验失败: {0}")]
    Validation(FieldErrors),

    /// 仓库操作失败
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// 是否为项目不存在错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Store(err) if err.is_not_found())
    }
}

/// 服务层操作结果类型
pub type ServiceResult<T> = Result<T, ServiceError>;
