/// 远程服务能力
///
/// 三个逻辑操作，每个都先经限速器等待，再发出单个 GET
use crate::error::TransportError;
use crate::infrastructure::RateLimiter;
use crate::models::{Identity, ShortlistCategory, Snapshot};
use reqwest::StatusCode;

/// 单页内使用的请求身份与限速
///
/// 每页开始时由当前设置快照构建，重新加载的延迟和 cookie 从下一页起生效
#[derive(Debug, Clone)]
pub struct Session {
    identity: Identity,
    limiter: RateLimiter,
}

impl Session {
    pub fn new(identity: Identity, limiter: RateLimiter) -> Self {
        Self { identity, limiter }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::new(
            snapshot.identity().clone(),
            RateLimiter::new(snapshot.criteria().request_delay()),
        )
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

#[allow(async_fn_in_trait)]
pub trait RemoteClient {
    /// 获取一页排行榜原始文本
    async fn fetch_leaderboard_page(
        &self,
        session: &Session,
        category: &str,
        page: u32,
    ) -> Result<String, TransportError>;

    /// 按查询片段获取资料原始文本
    async fn fetch_profile(&self, session: &Session, query: &str) -> Result<String, TransportError>;

    /// 发出入围操作，只返回传输状态
    async fn submit_shortlist(
        &self,
        session: &Session,
        profile_id: &str,
        category: ShortlistCategory,
    ) -> Result<StatusCode, TransportError>;
}
