//! API 配置
//!
//! 默认指向开发环境；前端在构建期可通过环境变量覆盖。

/// 默认后端地址
pub const DEFAULT_API_BASE: &str = "https://maestro-api-dev.secil.biz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// 创建配置，去掉末尾的 `/`；空字符串回退到默认地址
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://api.test///");
        assert_eq!(config.base_url(), "https://api.test");
        assert_eq!(config.url("/Auth/Login"), "https://api.test/Auth/Login");
        assert_eq!(config.url("Auth/Login"), "https://api.test/Auth/Login");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_BASE);
    }
}
