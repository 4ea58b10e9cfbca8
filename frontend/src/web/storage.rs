//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`，提供简洁的本地存储接口。

use serde::{Serialize, de::DeserializeOwned};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值，键不存在或出错时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 读取并反序列化 JSON 值；内容损坏时删除该键
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding corrupt storage entry {}: {}", key, e);
                Self::delete(key);
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => Self::set(key, &raw),
            Err(e) => {
                log::error!("failed to serialize storage entry {}: {}", key, e);
                false
            }
        }
    }
}
