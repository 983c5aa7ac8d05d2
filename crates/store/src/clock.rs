//! 时钟抽象
//!
//! 仓库写入时间戳、表单校验截止日期时都通过 [`Clock`] 获取当前时间，
//! 测试中可以替换为 [`ManualClock`] 以获得确定的结果。

use chrono::{DateTime, Local, NaiveDate, SubsecRound, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync + 'static {
    /// 当前UTC时间，精确到秒
    fn now(&self) -> DateTime<Utc>;

    /// 当前日历日期，用于截止日期校验（只比较到天）
    fn today(&self) -> NaiveDate;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 手动时钟，时间只会在调用 [`ManualClock::set`] / [`ManualClock::advance_secs`] 时变化
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            secs: AtomicI64::new(at.timestamp()),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.secs.store(at.timestamp(), Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.secs.load(Ordering::SeqCst), 0).unwrap_or_default()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
