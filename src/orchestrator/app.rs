//! 应用入口 - 编排层
//!
//! 负责把配置、设置文件、HTTP 客户端、入围记录和取消信号装配成爬取器，
//! 不处理单页或单个职员的细节。

use anyhow::{Context, Result};
use tracing::info;

use crate::clients::IgpClient;
use crate::config::Config;
use crate::infrastructure::{CancelSignal, SettingsWatcher};
use crate::orchestrator::crawler::{CrawlSummary, Crawler};
use crate::services::ShortlistLog;
use crate::utils::logging::log_startup;
use crate::workflow::CandidateFlow;

/// 应用主结构
pub struct App {
    crawler: Crawler<IgpClient, SettingsWatcher>,
}

impl App {
    /// 初始化应用
    ///
    /// 设置文件首次加载失败即返回错误
    pub async fn initialize(config: Config, cancel: CancelSignal) -> Result<Self> {
        log_startup(&config);

        let settings = SettingsWatcher::open(&config.settings_path)
            .await
            .with_context(|| format!("无法加载设置文件: {}", config.settings_path))?;

        let client = IgpClient::new(&config);
        let flow = CandidateFlow::new(Some(ShortlistLog::with_path(&config.shortlist_log_file)));
        let crawler = Crawler::new(client, settings, flow, cancel)
            .with_auth_failure_limit(config.auth_failure_limit);

        Ok(Self { crawler })
    }

    /// 运行应用主逻辑
    pub async fn run(mut self) -> Result<CrawlSummary> {
        let summary = self.crawler.run().await?;
        info!("✓ 运行结束");
        Ok(summary)
    }
}
