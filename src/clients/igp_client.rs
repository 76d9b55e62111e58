/// iGP Manager HTTP 客户端
///
/// 每次请求都新建客户端、不保留空闲连接，保证对同一主机同时只有一个连接
use crate::clients::remote::{RemoteClient, Session};
use crate::config::Config;
use crate::error::TransportError;
use crate::models::ShortlistCategory;
use reqwest::header::COOKIE;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

pub struct IgpClient {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl IgpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn leaderboard_url(&self, category: &str, page: u32) -> String {
        format!(
            "{}/content/misc/igp/ajax/hof.php?category={}&page={}",
            self.base_url, category, page
        )
    }

    pub fn profile_url(&self, query: &str) -> String {
        format!("{}/index.php?action=fetch&{}", self.base_url, query)
    }

    pub fn shortlist_url(&self, profile_id: &str, category: ShortlistCategory) -> String {
        format!(
            "{}/index.php?action=send&type=shortlist&eType={}&eId={}&jsReply=shortlist",
            self.base_url,
            category.code(),
            profile_id
        )
    }

    /// 单次使用的客户端
    fn single_use_client(&self, url: &str) -> Result<Client, TransportError> {
        Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })
    }

    async fn get(&self, session: &Session, url: String) -> Result<Response, TransportError> {
        session.limiter().wait().await;

        let client = self.single_use_client(&url)?;
        debug!("GET {}", url);

        let response = client
            .get(&url)
            .header(COOKIE, session.identity().cookie_header())
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { url, status });
        }

        Ok(response)
    }

    async fn get_text(&self, session: &Session, url: String) -> Result<String, TransportError> {
        let response = self.get(session, url.clone()).await?;
        response
            .text()
            .await
            .map_err(|source| TransportError::Request { url, source })
    }
}

impl RemoteClient for IgpClient {
    async fn fetch_leaderboard_page(
        &self,
        session: &Session,
        category: &str,
        page: u32,
    ) -> Result<String, TransportError> {
        self.get_text(session, self.leaderboard_url(category, page)).await
    }

    async fn fetch_profile(&self, session: &Session, query: &str) -> Result<String, TransportError> {
        self.get_text(session, self.profile_url(query)).await
    }

    async fn submit_shortlist(
        &self,
        session: &Session,
        profile_id: &str,
        category: ShortlistCategory,
    ) -> Result<StatusCode, TransportError> {
        let response = self
            .get(session, self.shortlist_url(profile_id, category))
            .await?;
        Ok(response.status())
    }
}
