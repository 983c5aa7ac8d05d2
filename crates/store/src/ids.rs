//! 新项目ID生成
//!
//! - [`MaxNumericIds`]: 当前最大数字ID + 1，遇到非数字ID时返回 [`StoreError::NonNumericId`]
//! - [`CounterIds`]: 单调递增计数器，仓库创建时初始化一次，之后不再解析已有ID
//!
//! 两种策略在ID超过 `u64::MAX` 时都返回 [`StoreError::IdSpaceExhausted`]

use crate::models::project::Project;
use crate::{StoreError, StoreResult};
use shared_lib::IdStrategy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub trait IdGenerator: Send + Sync + 'static {
    /// 根据当前项目列表生成一个新的、不重复的ID
    fn next_id(&self, existing: &[Project]) -> StoreResult<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaxNumericIds;

impl IdGenerator for MaxNumericIds {
    fn next_id(&self, existing: &[Project]) -> StoreResult<String> {
        let max = existing.iter().try_fold(0u64, |max, project| {
            project
                .id
                .parse::<u64>()
                .map(|id| max.max(id))
                .map_err(|_| StoreError::non_numeric_id(&project.id))
        })?;

        let next = max.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?;
        Ok(next.to_string())
    }
}

#[derive(Debug)]
pub struct CounterIds {
    /// 最近一次分配（或种子中最大）的ID
    last: AtomicU64,
}

impl CounterIds {
    /// 从已有项目中最大的数字ID之后开始计数，非数字ID会被忽略
    pub fn starting_after(existing: &[Project]) -> Self {
        let max = existing.iter().filter_map(|p| p.id.parse::<u64>().ok()).max().unwrap_or(0);
        Self {
            last: AtomicU64::new(max),
        }
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&self, existing: &[Project]) -> StoreResult<String> {
        loop {
            let candidate = self
                .last
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
                .map(|last| last + 1)
                .map_err(|_| StoreError::IdSpaceExhausted)?
                .to_string();
            if !existing.iter().any(|p| p.id == candidate) {
                return Ok(candidate);
            }
        }
    }
}

/// 根据配置的策略创建ID生成器
pub fn id_generator(strategy: IdStrategy, seed: &[Project]) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::MaxNumeric => Arc::new(MaxNumericIds),
        IdStrategy::Counter => Arc::new(CounterIds::starting_after(seed)),
    }
}
