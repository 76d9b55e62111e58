//! # iGP Shortlist
//!
//! 遍历 iGP Manager 排行榜，按筛选条件自动把符合要求的职员加入候选名单
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 限速器、设置热加载、取消信号
//! - `clients/` - 远程服务能力（排行榜、资料、入围），`IgpClient` 为 HTTP 实现
//!
//! ### ② 业务能力层（Services）
//! - `AttributeParser` - 从无固定结构的文本中提取字段
//! - `EligibilityEvaluator` - 角色判定与门槛规则
//! - `ShortlistLog` - 写入围记录
//!
//! ### ③ 流程层（Workflow）
//! - `CandidateCtx` - 上下文封装（页码 + 经理 + 职员）
//! - `CandidateFlow` - 流程编排（获取 → 解析 → 评估 → 入围）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/crawler` - 页循环、设置快照、取消、统计
//! - `orchestrator/page_processor` - 单页的经理和职员循环
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{IgpClient, RemoteClient, Session};
pub use config::Config;
pub use error::{ConfigError, CrawlError, PageError, ParseError, TransportError};
pub use infrastructure::{cancel_pair, CancelSignal, FixedSettings, SettingsSource, SettingsWatcher};
pub use models::{Criteria, Identity, Settings, ShortlistCategory, Snapshot};
pub use orchestrator::{App, CrawlSummary, Crawler};
pub use services::{EligibilityEvaluator, Verdict};
pub use workflow::{CandidateCtx, CandidateFlow, CandidateOutcome};
