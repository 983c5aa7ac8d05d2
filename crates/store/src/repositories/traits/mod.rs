//! 仓库 trait 定义
//!
//! 这里定义了项目存储的抽象接口
//!
//! ## Repository Trait 约束 🎯
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`: 仓库实例会被控制器和HTTP层共享，异步方法返回的 `Future` 需要跨线程传递
//! - `'static`: 作为应用服务长期存在，不依赖短期引用
//!
//! 所有方法都是异步的，并统一返回 `StoreResult<T>`。当前实现是带模拟延迟的内存仓库
//! [`crate::InMemoryProjectRepository`]，替换为真实后端时只需要实现同一个 trait，
//! 上层的服务和控制器不需要任何修改。

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
