//! 单页处理器 - 编排层
//!
//! ## 职责
//!
//! 处理排行榜的一页：遍历经理，再遍历经理名下的职员。
//!
//! ## 核心功能
//!
//! 1. **获取页面**：按当前类别获取排行榜文本
//! 2. **遍历经理**：按文档顺序解析经理引用并获取经理资料
//! 3. **角色筛选**：未启用的角色不发出资料请求
//! 4. **流程调度**：委托 `CandidateFlow` 处理单个职员
//! 5. **提前结束**：遇到已入围的职员即停止本页

use tracing::{debug, info};

use crate::clients::{RemoteClient, Session};
use crate::error::PageError;
use crate::infrastructure::CancelSignal;
use crate::models::Criteria;
use crate::services::attribute_parser::{candidate_refs, decode_roster, manager_refs};
use crate::workflow::{CandidateCtx, CandidateFlow, CandidateOutcome};

/// 单页统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub managers: usize,
    pub evaluated: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub skipped: usize,
}

/// 单页结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEnd {
    Completed,
    /// 遇到已入围的职员，剩余候选人未处理
    Aborted,
    Cancelled,
}

/// 处理单页
///
/// 传输错误和经理资料解析错误返回给调用方，由调用方放弃本页；
/// 在此之前的统计已计入 `stats`
pub async fn process_page<C: RemoteClient>(
    client: &C,
    flow: &CandidateFlow,
    session: &Session,
    criteria: &Criteria,
    page: u32,
    cancel: &CancelSignal,
    stats: &mut PageStats,
) -> Result<PageEnd, PageError> {
    let text = client
        .fetch_leaderboard_page(session, &criteria.hof_category, page)
        .await?;

    for manager in manager_refs(&text) {
        stats.managers += 1;
        debug!("[第 {} 页] 经理 #{}", page, manager.id);

        let roster = decode_roster(&client.fetch_profile(session, &manager.query).await?)?;

        for candidate in candidate_refs(&roster) {
            if cancel.is_cancelled() {
                return Ok(PageEnd::Cancelled);
            }
            if !criteria.includes(candidate.role) {
                continue;
            }

            let ctx = CandidateCtx::new(
                page,
                manager.id.clone(),
                candidate.role,
                candidate.id.clone(),
            );
            stats.evaluated += 1;

            match flow.run(client, session, criteria, &candidate, &ctx).await? {
                CandidateOutcome::Shortlisted(_) => stats.shortlisted += 1,
                CandidateOutcome::Rejected(_) => stats.rejected += 1,
                CandidateOutcome::Skipped(_) => stats.skipped += 1,
                CandidateOutcome::AbortPage => return Ok(PageEnd::Aborted),
            }
        }
    }

    if stats.managers == 0 {
        info!("[第 {} 页] 没有找到经理", page);
    }

    Ok(PageEnd::Completed)
}
