//! 当前时间
//!
//! 共享层只定义 `Timestamp`，获取当前时间依赖 `js_sys::Date`。

use vitrine_shared::Timestamp;

#[inline]
pub fn now() -> Timestamp {
    Timestamp::new(js_sys::Date::now() as i64)
}
