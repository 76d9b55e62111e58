/// 程序配置（进程级，来自环境变量）
///
/// 筛选条件与身份信息放在可热加载的设置文件中，见 [`crate::models::Settings`]
#[derive(Clone, Debug)]
pub struct Config {
    /// 远程服务根地址
    pub base_url: String,
    /// 设置文件（TOML）路径
    pub settings_path: String,
    /// 运行日志文件
    pub output_log_file: String,
    /// 已入围记录文件（只写，不作去重用途）
    pub shortlist_log_file: String,
    /// 日志级别（未设置 RUST_LOG 时使用）
    pub log_level: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 请求头 User-Agent
    pub user_agent: String,
    /// 连续多少页身份凭证失效后终止运行
    pub auth_failure_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://igpmanager.com".to_string(),
            settings_path: "settings.toml".to_string(),
            output_log_file: "output.txt".to_string(),
            shortlist_log_file: "shortlisted.txt".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            user_agent: concat!("igp_shortlist/", env!("CARGO_PKG_VERSION")).to_string(),
            auth_failure_limit: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("IGP_BASE_URL").unwrap_or(default.base_url),
            settings_path: std::env::var("IGP_SETTINGS").unwrap_or(default.settings_path),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            shortlist_log_file: std::env::var("SHORTLIST_LOG_FILE").unwrap_or(default.shortlist_log_file),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(default.log_level),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            user_agent: std::env::var("IGP_USER_AGENT").unwrap_or(default.user_agent),
            auth_failure_limit: std::env::var("AUTH_FAILURE_LIMIT").ok().and_then(|v| v.parse().ok()).filter(|v| *v > 0).unwrap_or(default.auth_failure_limit),
        }
    }
}
