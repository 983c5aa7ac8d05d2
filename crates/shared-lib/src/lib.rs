//! 🔧 共享库模块
//!
//! 这个模块包含了在多个crate之间共享的通用代码，包括：
//! - 程序配置（环境变量 / `.env`）
//! - 模拟延迟和ID生成策略
//! - 默认常量

pub mod models;

// 重新导出常用类型
pub use models::{
    AppConfig, IdStrategy, SimulatedLatency,
    // 默认常量
    DEFAULT_BIND_ADDR, DEFAULT_CREATE_DELAY_MS, DEFAULT_DELETE_DELAY_MS, DEFAULT_LOG_LEVEL,
    DEFAULT_UPDATE_DELAY_MS,
};
