use crate::models::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CREATE_DELAY_MS, DEFAULT_DELETE_DELAY_MS, DEFAULT_LOG_LEVEL, DEFAULT_UPDATE_DELAY_MS,
};
use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// 模拟后端延迟
///
/// 内存仓库在修改数据之前会先等待对应的时长，用来模拟真实网络调用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    /// 创建项目的延迟，可通过环境变量 `CREATE_DELAY_MS` 来调整
    pub create: Duration,

    /// 更新项目的延迟，可通过环境变量 `UPDATE_DELAY_MS` 来调整
    pub update: Duration,

    /// 删除项目的延迟，可通过环境变量 `DELETE_DELAY_MS` 来调整
    pub delete: Duration,
}

impl SimulatedLatency {
    /// 没有任何延迟，主要给测试使用
    pub const fn none() -> Self {
        Self {
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            create: Duration::from_millis(DEFAULT_CREATE_DELAY_MS),
            update: Duration::from_millis(DEFAULT_UPDATE_DELAY_MS),
            delete: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
        }
    }
}

/// 新项目ID的生成策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// 单调递增计数器，在仓库创建时根据种子数据初始化，之后不再解析已有ID
    #[default]
    Counter,

    /// 当前最大数字ID + 1，要求所有已有ID都是十进制整数
    MaxNumeric,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("未知的ID生成策略: {0}")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "max-numeric" => Ok(IdStrategy::MaxNumeric),
            "counter" => Ok(IdStrategy::Counter),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP服务监听地址，可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: String,

    /// 模拟延迟
    pub latency: SimulatedLatency,

    /// 新项目ID的生成策略，环境变量 `ID_STRATEGY`
    pub id_strategy: IdStrategy,

    /// 种子数据文件（JSON），为空时使用内置的示例项目
    pub seed_file: Option<PathBuf>,

    /// 日志级别，环境变量 `LOG_LEVEL`
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，没有.env文件也可以正常启动
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Can not parse .env file");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据传入的查找函数构建配置
    ///
    /// `load` 使用环境变量作为查找来源，测试时可以直接传入固定的键值。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id_strategy = lookup("ID_STRATEGY")
            .map(|s| s.parse::<IdStrategy>())
            .transpose()
            .context("Can not parse ID_STRATEGY in environment")
            .suggestion("设置 ID_STRATEGY 为 counter 或 max-numeric")?
            .unwrap_or_default();

        Ok(AppConfig {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            latency: SimulatedLatency {
                create: millis(&lookup, "CREATE_DELAY_MS", DEFAULT_CREATE_DELAY_MS),
                update: millis(&lookup, "UPDATE_DELAY_MS", DEFAULT_UPDATE_DELAY_MS),
                delete: millis(&lookup, "DELETE_DELAY_MS", DEFAULT_DELETE_DELAY_MS),
            },
            id_strategy,
            seed_file: lookup("SEED_FILE").filter(|s| !s.trim().is_empty()).map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn millis<F>(lookup: &F, key: &str, default: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    Duration::from_millis(lookup(key).map_or(default, |s| s.trim().parse().unwrap_or(default)))
}
