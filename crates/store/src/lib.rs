//! 项目存储模块
//!
//! 这个模块提供了项目数据模型、种子数据以及内存仓库（带模拟延迟）等功能

pub mod bootstrap;
pub mod clock;
pub mod error;
pub mod ids;
pub mod models;
pub mod repositories;
pub mod seed;

pub use bootstrap::initialize_store;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use ids::{id_generator, CounterIds, IdGenerator, MaxNumericIds};
pub use models::project::{ParseStatusError, Project, ProjectFormData, ProjectStatus};
pub use repositories::{
    project::{InMemoryProjectRepository, StoreOptions},
    traits::ProjectRepositoryTrait,
};

/// 存储操作结果类型
pub type StoreResult<T> = Result<T, StoreError>;
