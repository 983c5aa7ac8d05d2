//! 默认常量定义模块
//!
//! 统一管理配置项的默认值，环境变量缺失或者无法解析时使用。

/// HTTP服务默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 创建项目的模拟延迟（毫秒）
pub const DEFAULT_CREATE_DELAY_MS: u64 = 1000;

/// 更新项目的模拟延迟（毫秒）
pub const DEFAULT_UPDATE_DELAY_MS: u64 = 1000;

/// 删除项目的模拟延迟（毫秒）
pub const DEFAULT_DELETE_DELAY_MS: u64 = 500;

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "debug";
