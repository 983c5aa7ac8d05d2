use thiserror::Error;

/// 存储操作错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 指定ID的项目不存在
    #[error("项目不存在: {0}")]
    NotFound(String),

    /// 已有ID不是十进制整数，无法按最大值生成新ID
    #[error("无法根据非数字ID生成新ID: {0}")]
    NonNumericId(String),

    /// 数字ID已经到达u64上限，无法再生成新ID
    #[error("项目ID已经用尽")]
    IdSpaceExhausted,

    /// 种子数据中存在重复ID
    #[error("重复的项目ID: {0}")]
    DuplicateId(String),

    /// 种子数据不满足约束
    #[error("种子数据无效: {0}")]
    InvalidSeed(String),

    /// 种子数据JSON格式错误
    #[error("种子数据解析错误: {0}")]
    SeedFormat(#[from] serde_json::Error),

    /// 读取种子文件失败
    #[error("读取种子文件失败: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// 创建项目不存在错误
    pub fn not_found<T: ToString>(id: T) -> Self {
        Self::NotFound(id.to_string())
    }

    /// 创建非数字ID错误
    pub fn non_numeric_id<T: ToString>(id: T) -> Self {
        Self::NonNumericId(id.to_string())
    }

    /// 创建种子数据无效错误
    pub fn invalid_seed<T: ToString>(msg: T) -> Self {
        Self::InvalidSeed(msg.to_string())
    }

    /// 是否为项目不存在错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
