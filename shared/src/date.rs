//! 时间类型模块
//!
//! `Timestamp`: 可序列化的毫秒时间戳，用于会话过期判断与本地持久化。
//! 获取当前时间属于平台能力，由前端 (`js_sys::Date::now`) 提供。

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0.saturating_add(rhs.as_millis() as i64))
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 两个时间戳之间的差值，负数截断为 0
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let start = Timestamp::new(1_000);
        let later = start + Duration::from_secs(2);
        assert_eq!(later.as_millis(), 3_000);
        assert_eq!(later - start, Duration::from_secs(2));
        // 反向相减截断为 0
        assert_eq!(start - later, Duration::ZERO);
    }
}
