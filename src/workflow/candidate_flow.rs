//! 候选人处理流程 - 流程层
//!
//! 核心职责：定义"一位职员"的完整处理流程
//!
//! 流程顺序：
//! 1. 获取资料 → 解析
//! 2. 资格评估
//! 3. 符合条件则发出入围操作并记录

use tracing::{debug, info, warn};

use crate::clients::{RemoteClient, Session};
use crate::error::{ParseError, TransportError};
use crate::models::{CandidateRef, Criteria, ShortlistTarget};
use crate::services::attribute_parser::decode_staff;
use crate::services::eligibility::{EligibilityEvaluator, RejectReason, Verdict};
use crate::services::ShortlistLog;
use crate::workflow::candidate_ctx::CandidateCtx;

/// 候选人处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// 已发出入围操作
    Shortlisted(ShortlistTarget),
    /// 不符合条件
    Rejected(RejectReason),
    /// 资料字段异常，跳过该候选人
    Skipped(ParseError),
    /// 已入围过，停止本页
    AbortPage,
}

/// 候选人处理流程
///
/// - 不持有连接或设置，只依赖调用方传入的客户端和会话
/// - 传输错误原样返回，由页级别处理
pub struct CandidateFlow {
    shortlist_log: Option<ShortlistLog>,
}

impl CandidateFlow {
    pub fn new(shortlist_log: Option<ShortlistLog>) -> Self {
        Self { shortlist_log }
    }

    pub async fn run<C: RemoteClient>(
        &self,
        client: &C,
        session: &Session,
        criteria: &Criteria,
        candidate: &CandidateRef,
        ctx: &CandidateCtx,
    ) -> Result<CandidateOutcome, TransportError> {
        let text = client.fetch_profile(session, &candidate.query).await?;

        let profile = match decode_staff(&text) {
            Ok(profile) => profile,
            Err(e) => return Ok(self.skip(ctx, e)),
        };

        let verdict = match EligibilityEvaluator::new(criteria).evaluate(candidate, &profile) {
            Ok(verdict) => verdict,
            Err(e) => return Ok(self.skip(ctx, e)),
        };

        match verdict {
            Verdict::AbortPage => {
                info!("{} 已入围过，跳过本页剩余候选人", ctx);
                Ok(CandidateOutcome::AbortPage)
            }
            Verdict::Reject(reason) => {
                debug!("{} 不符合条件: {}", ctx, reason);
                Ok(CandidateOutcome::Rejected(reason))
            }
            Verdict::Accept(target) => {
                info!("{} 🎯 符合条件，入围类别 {}", ctx, target.category);

                let status = client
                    .submit_shortlist(session, &target.profile_id, target.category)
                    .await?;
                info!("{} ✓ 入围请求已发送 ({})", ctx, status);

                self.record(ctx, &target).await;
                Ok(CandidateOutcome::Shortlisted(target))
            }
        }
    }

    fn skip(&self, ctx: &CandidateCtx, err: ParseError) -> CandidateOutcome {
        warn!("{} ⚠️ 资料解析失败，跳过: {}", ctx, err);
        CandidateOutcome::Skipped(err)
    }

    async fn record(&self, ctx: &CandidateCtx, target: &ShortlistTarget) {
        if let Some(log) = &self.shortlist_log {
            if let Err(e) = log.record(ctx.page, ctx.role, target).await {
                warn!("{} ⚠️ 写入入围记录失败: {}", ctx, e);
            }
        }
    }
}
