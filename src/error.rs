use reqwest::StatusCode;
use thiserror::Error;

/// 远程调用错误（请求失败或返回非成功状态）
///
/// 在页级别恢复：记录日志，放弃当前页，继续下一页
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({url}): {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非成功状态
    #[error("服务器返回 {status} ({url})")]
    Status { url: String, status: StatusCode },
}

impl TransportError {
    /// 是否为身份凭证失效（401 / 403）
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            TransportError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// 文档中缺少必需字段的标记
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 必需的标记模式不存在
    #[error("字段 {field} 缺少标记: {snippet:?}")]
    MissingMarker { field: &'static str, snippet: String },
    /// 数值超出范围
    #[error("字段 {field} 数值无效: {value}")]
    InvalidNumber { field: &'static str, value: String },
    /// 车手资料缺少必需的数值字段
    #[error("车手资料缺少字段 {field}")]
    MissingDriverField { field: &'static str },
    /// JSON 结构无法解析
    #[error("JSON解析失败: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err.to_string())
    }
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 单页处理中的错误，页级别恢复
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// 整次爬取的致命错误
#[derive(Debug, Error)]
pub enum CrawlError {
    /// 连续多页身份凭证失效，继续只会重复同样的失败
    #[error("身份凭证连续 {failures} 页失效，终止运行: {last}")]
    Credentials {
        failures: u32,
        #[source]
        last: TransportError,
    },
}
