//! 排行榜爬取器 - 编排层
//!
//! ## 职责
//!
//! 从起始页倒序处理到第 0 页，严格串行。
//!
//! ## 核心功能
//!
//! 1. **设置快照**：每页开始时读取当前设置，页内不变
//! 2. **取消检查**：每页、每个候选人开始前检查取消信号
//! 3. **页级恢复**：单页失败只记录一行，继续下一页
//! 4. **凭证失效**：连续多页 401/403 时终止运行
//! 5. **全局统计**：汇总所有页的处理结果
//!
//! 已入围的职员不会跨运行记住，再次运行可能重复发出入围操作。

use tracing::{error, info, warn};

use crate::clients::{RemoteClient, Session};
use crate::error::{CrawlError, PageError};
use crate::infrastructure::{CancelSignal, SettingsSource};
use crate::orchestrator::page_processor::{process_page, PageEnd, PageStats};
use crate::workflow::CandidateFlow;

/// 整次运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_visited: usize,
    pub pages_failed: usize,
    pub pages_aborted: usize,
    pub candidates_evaluated: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub cancelled: bool,
}

impl CrawlSummary {
    fn absorb(&mut self, stats: &PageStats) {
        self.candidates_evaluated += stats.evaluated;
        self.shortlisted += stats.shortlisted;
        self.rejected += stats.rejected;
        self.skipped += stats.skipped;
    }
}

pub struct Crawler<C, S> {
    client: C,
    settings: S,
    flow: CandidateFlow,
    cancel: CancelSignal,
    auth_failure_limit: u32,
}

impl<C: RemoteClient, S: SettingsSource> Crawler<C, S> {
    pub fn new(client: C, settings: S, flow: CandidateFlow, cancel: CancelSignal) -> Self {
        Self {
            client,
            settings,
            flow,
            cancel,
            auth_failure_limit: 3,
        }
    }

    pub fn with_auth_failure_limit(mut self, limit: u32) -> Self {
        self.auth_failure_limit = limit.max(1);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 运行一次完整爬取
    pub async fn run(&mut self) -> Result<CrawlSummary, CrawlError> {
        let starting_page = self.settings.current().await.criteria().starting_page;
        let mut summary = CrawlSummary::default();
        let mut auth_failures = 0u32;

        info!("🚀 从第 {} 页开始，倒序处理到第 0 页", starting_page);

        for page in (0..=starting_page).rev() {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }

            let snapshot = self.settings.current().await;
            let criteria = snapshot.criteria();
            let session = Session::from_snapshot(&snapshot);
            info!(
                "[第 {} 页] 开始处理 (设置版本 {}, 请求间隔 {:?})",
                page,
                snapshot.version,
                session.limiter().delay()
            );

            let mut stats = PageStats::default();
            let result = process_page(
                &self.client,
                &self.flow,
                &session,
                criteria,
                page,
                &self.cancel,
                &mut stats,
            )
            .await;

            summary.pages_visited += 1;
            summary.absorb(&stats);

            match result {
                Ok(end) => {
                    auth_failures = 0;
                    match end {
                        PageEnd::Completed => log_page_complete(page, &stats),
                        PageEnd::Aborted => {
                            summary.pages_aborted += 1;
                            log_page_complete(page, &stats);
                        }
                        PageEnd::Cancelled => {
                            summary.cancelled = true;
                            break;
                        }
                    }
                }
                Err(PageError::Transport(e)) if e.is_credential_failure() => {
                    summary.pages_failed += 1;
                    auth_failures += 1;
                    error!("[第 {} 页] ❌ 身份凭证失效 ({}/{}): {}", page, auth_failures, self.auth_failure_limit, e);
                    if auth_failures >= self.auth_failure_limit {
                        log_summary(&summary);
                        return Err(CrawlError::Credentials {
                            failures: auth_failures,
                            last: e,
                        });
                    }
                }
                Err(e) => {
                    summary.pages_failed += 1;
                    auth_failures = 0;
                    error!("[第 {} 页] ❌ 处理失败，跳到下一页: {}", page, e);
                }
            }
        }

        if summary.cancelled {
            warn!("⚠️ 运行已取消");
        }
        log_summary(&summary);

        Ok(summary)
    }
}

// ========== 日志辅助函数 ==========

fn log_page_complete(page: u32, stats: &PageStats) {
    info!(
        "[第 {} 页] 完成: 经理 {}, 评估 {}, 入围 {}, 拒绝 {}, 跳过 {}",
        page, stats.managers, stats.evaluated, stats.shortlisted, stats.rejected, stats.skipped
    );
}

fn log_summary(summary: &CrawlSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "📄 页数: {} (失败 {}, 提前结束 {})",
        summary.pages_visited, summary.pages_failed, summary.pages_aborted
    );
    info!("👥 评估职员: {}", summary.candidates_evaluated);
    info!("✅ 入围: {}", summary.shortlisted);
    info!("➖ 拒绝: {} / 跳过: {}", summary.rejected, summary.skipped);
    info!("{}", "=".repeat(60));
}
