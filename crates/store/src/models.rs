//! 数据模型模块
//!
//! 这里定义项目记录以及表单提交数据

pub mod project;

// 重新导出具体的模型
pub use project::{ParseStatusError, Project, ProjectFormData, ProjectStatus};
