//! 仓库模块
//!
//! 这里定义项目存储的Repository层

pub mod project;
pub mod traits;

// 重新导出具体的类型
pub use project::{InMemoryProjectRepository, StoreOptions};
pub use traits::ProjectRepositoryTrait;
