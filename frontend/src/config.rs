//! 前端运行配置
//!
//! 构建期读取 `VITRINE_API_BASE`，未设置时使用共享层的默认地址。

use vitrine_shared::ApiConfig;

/// 构建期环境变量名
const API_BASE_ENV: &str = "VITRINE_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_env_value(option_env!("VITRINE_API_BASE"))
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let api = match value {
            Some(base) => {
                log::debug!("{} = {}", API_BASE_ENV, base);
                ApiConfig::new(base)
            }
            None => ApiConfig::default(),
        };
        Self { api }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_shared::config::DEFAULT_API_BASE;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_env_value(None);
        assert_eq!(config.api.base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_env_value_is_normalized() {
        let config = AppConfig::from_env_value(Some("http://localhost:5000/"));
        assert_eq!(config.api.base_url(), "http://localhost:5000");

        let config = AppConfig::from_env_value(Some("  "));
        assert_eq!(config.api.base_url(), DEFAULT_API_BASE);
    }
}
