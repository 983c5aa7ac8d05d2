pub mod config;
pub mod constants;

// 重新导出具体的类型
pub use config::{AppConfig, IdStrategy, SimulatedLatency};
pub use constants::*;
