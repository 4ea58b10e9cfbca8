use thiserror::Error;

/// 与远端 API 交互时的错误
///
/// 所有错误都是可恢复的：调用方记录日志后保持原状态不变。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求构建失败
    #[error("请求构建失败: {0}")]
    RequestBuild(String),
    /// 网络请求失败（无响应）
    #[error("网络错误: {0}")]
    Network(String),
    /// 非 2xx 的 HTTP 状态
    #[error("HTTP 状态异常: {0}")]
    Status(u16),
    /// 响应体中的 `status` 字段表示失败
    #[error("服务端拒绝请求 ({status}): {message}")]
    Rejected { status: i64, message: String },
    /// 响应解析失败
    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),
    /// 请求体序列化失败
    #[error("序列化失败: {0}")]
    Encode(String),
    /// 登录响应中没有 accessToken
    #[error("登录响应缺少 accessToken")]
    MissingToken,
}

impl ApiError {
    /// 是否为远端明确给出的 HTTP 失败状态
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
